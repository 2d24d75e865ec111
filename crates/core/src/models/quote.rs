use serde::{Deserialize, Serialize};

/// A point-in-time price snapshot for one ticker.
///
/// Quotes are immutable: a refresh replaces the whole snapshot, it never
/// patches individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Company name (e.g., "Apple Inc.")
    pub name: String,

    /// Last traded price in USD
    pub price: f64,

    /// Absolute change since previous close
    pub change: f64,

    /// Change since previous close, in percent
    pub change_percent: f64,

    /// Shares traded in the session
    pub volume: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    #[serde(default, rename = "high52Week", skip_serializing_if = "Option::is_none")]
    pub high_52_week: Option<f64>,

    #[serde(default, rename = "low52Week", skip_serializing_if = "Option::is_none")]
    pub low_52_week: Option<f64>,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        change: f64,
        change_percent: f64,
        volume: u64,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            price,
            change,
            change_percent,
            volume,
            market_cap: None,
            high_52_week: None,
            low_52_week: None,
        }
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    pub fn with_52_week_range(mut self, low: f64, high: f64) -> Self {
        self.low_52_week = Some(low);
        self.high_52_week = Some(high);
        self
    }

    pub fn is_gainer(&self) -> bool {
        self.change > 0.0
    }

    pub fn is_loser(&self) -> bool {
        self.change < 0.0
    }
}

/// Gainers/losers filter on the market listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketFilter {
    #[default]
    All,
    /// change > 0
    Gainers,
    /// change < 0
    Losers,
}

/// Sort order for the market listing. Numeric keys sort descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarketSort {
    /// Largest first; quotes without a market cap count as 0
    #[default]
    MarketCap,
    Price,
    Change,
    Volume,
    /// Alphabetical
    Symbol,
}

/// Search/filter/sort state of the market page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketQuery {
    pub search: String,
    pub filter: MarketFilter,
    pub sort: MarketSort,
}

/// Count of advancing, declining and flat quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStats {
    pub gainers: usize,
    pub losers: usize,
    pub unchanged: usize,
}

/// Company details shown on the stock detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockProfile {
    pub quote: Quote,
    pub pe_ratio: f64,
    pub dividend: f64,
    pub beta: f64,
    pub description: String,
    pub sector: String,
    pub employees: u64,
    pub founded: String,
    pub headquarters: String,
}

impl StockProfile {
    /// Generic profile for a symbol that has no detail record.
    pub fn placeholder(symbol: &str) -> Self {
        let symbol = symbol.to_uppercase();
        Self {
            quote: Quote::new(
                symbol.clone(),
                format!("{symbol} Corporation"),
                100.0,
                0.0,
                0.0,
                1_000_000,
            )
            .with_market_cap(10_000_000_000.0)
            .with_52_week_range(80.0, 120.0),
            pe_ratio: 20.0,
            dividend: 0.0,
            beta: 1.0,
            description: format!("{symbol} is a publicly traded company."),
            sector: "Technology".to_string(),
            employees: 10_000,
            founded: "2000".to_string(),
            headquarters: "San Francisco, CA".to_string(),
        }
    }
}
