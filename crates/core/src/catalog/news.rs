use chrono::{DateTime, TimeZone, Utc};

use crate::models::news::NewsItem;

fn published(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn article(
    id: &str,
    title: &str,
    summary: &str,
    source: &str,
    published_at: DateTime<Utc>,
    related: &[&str],
) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        url: "#".to_string(),
        published_at,
        source: source.to_string(),
        related_symbols: related.iter().map(|s| s.to_string()).collect(),
    }
}

/// The news feed.
pub fn articles() -> Vec<NewsItem> {
    vec![
        article(
            "1",
            "Apple Reports Record Q4 Earnings, Beats Wall Street Expectations",
            "Apple Inc. reported quarterly earnings that exceeded analyst expectations, driven by \
             strong iPhone sales and growing services revenue. The company's stock surged in \
             after-hours trading.",
            "Financial Times",
            published(2024, 1, 7, 10, 30),
            &["AAPL"],
        ),
        article(
            "2",
            "Federal Reserve Signals Potential Interest Rate Changes",
            "The Federal Reserve indicated possible adjustments to interest rates in the coming \
             months, citing inflation concerns and economic growth patterns. Markets reacted with \
             mixed sentiment.",
            "Reuters",
            published(2024, 1, 7, 9, 15),
            &[],
        ),
        article(
            "3",
            "Tesla Announces New Gigafactory in Southeast Asia",
            "Tesla revealed plans for a new manufacturing facility in Southeast Asia, marking the \
             company's continued global expansion. The announcement comes amid growing demand for \
             electric vehicles in the region.",
            "TechCrunch",
            published(2024, 1, 7, 8, 45),
            &["TSLA"],
        ),
        article(
            "4",
            "Microsoft Azure Cloud Revenue Grows 30% Year-over-Year",
            "Microsoft's cloud computing division showed strong growth in the latest quarter, with \
             Azure revenue increasing significantly. The company continues to compete aggressively \
             with Amazon Web Services.",
            "Bloomberg",
            published(2024, 1, 6, 16, 20),
            &["MSFT"],
        ),
        article(
            "5",
            "Cryptocurrency Market Sees Major Volatility Amid Regulatory News",
            "Digital currencies experienced significant price swings following announcements from \
             regulatory bodies. Bitcoin and Ethereum led the market movements with substantial \
             trading volumes.",
            "CoinDesk",
            published(2024, 1, 6, 14, 30),
            &[],
        ),
        article(
            "6",
            "Google Unveils New AI-Powered Search Features",
            "Alphabet's Google introduced advanced artificial intelligence capabilities to its \
             search platform, promising more accurate and contextual results for users worldwide.",
            "The Verge",
            published(2024, 1, 6, 12, 15),
            &["GOOGL"],
        ),
        article(
            "7",
            "Oil Prices Rise on Supply Chain Concerns",
            "Crude oil prices increased following reports of potential supply chain disruptions in \
             key producing regions. Energy sector stocks responded positively to the news.",
            "Wall Street Journal",
            published(2024, 1, 6, 11, 0),
            &[],
        ),
        article(
            "8",
            "Netflix Subscriber Growth Exceeds Forecasts",
            "The streaming giant reported subscriber additions that surpassed analyst predictions, \
             driven by popular original content and international expansion efforts.",
            "Variety",
            published(2024, 1, 5, 15, 45),
            &["NFLX"],
        ),
    ]
}
