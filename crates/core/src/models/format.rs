//! Display formatting for amounts, percentages and market caps (en-US style).

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Insert thousands separators into an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole number with thousands separators, e.g. `45,234,567`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Currency amount with two decimals, e.g. `$1,234.56` or `-$89.23`.
/// Non-USD codes are written as a prefix: `EUR 1,234.56`.
pub fn format_currency(value: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    let symbol = if currency.eq_ignore_ascii_case("USD") {
        "$".to_string()
    } else {
        format!("{} ", currency.to_uppercase())
    };
    format!("{sign}{symbol}{}.{frac_part}", group_thousands(int_part))
}

/// Signed percentage with two decimals, e.g. `+1.24%`, `-0.55%`.
/// Zero is shown with a plus sign.
pub fn format_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}%")
}

/// Compact market capitalisation: `$2.8T`, `$36.0B`, `$450.0M`.
/// Values under a million fall back to [`format_currency`].
pub fn format_market_cap(value: f64, decimals: usize) -> String {
    if value >= 1e12 {
        format!("${:.*}T", decimals, value / 1e12)
    } else if value >= 1e9 {
        format!("${:.*}B", decimals, value / 1e9)
    } else if value >= 1e6 {
        format!("${:.*}M", decimals, value / 1e6)
    } else {
        format_currency(value, "USD")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(4385.75, "USD"), "$4,385.75");
        assert_eq!(format_currency(100_000.0, "USD"), "$100,000.00");
        assert_eq!(format_currency(12.5, "USD"), "$12.50");
    }

    #[test]
    fn currency_negative_and_other_codes() {
        assert_eq!(format_currency(-328.56, "USD"), "-$328.56");
        assert_eq!(format_currency(1234.5, "eur"), "EUR 1,234.50");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn percent_is_signed() {
        assert_eq!(format_percent(1.24), "+1.24%");
        assert_eq!(format_percent(-3.456), "-3.46%");
        assert_eq!(format_percent(0.0), "+0.00%");
    }

    #[test]
    fn market_cap_units() {
        assert_eq!(format_market_cap(2.8e12, 1), "$2.8T");
        assert_eq!(format_market_cap(36e9, 1), "$36.0B");
        assert_eq!(format_market_cap(1.8e12, 2), "$1.80T");
        assert_eq!(format_market_cap(450e6, 1), "$450.0M");
        assert_eq!(format_market_cap(999.0, 1), "$999.00");
    }

    #[test]
    fn counts_and_rounding() {
        assert_eq!(format_count(45_234_567), "45,234,567");
        assert_eq!(format_count(999), "999");
        assert_eq!(round_to(5.997_164_95, 1), 6.0);
        assert_eq!(round_to(-1.816_6, 2), -1.82);
    }
}
