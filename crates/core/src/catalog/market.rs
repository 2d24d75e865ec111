use crate::models::quote::{Quote, StockProfile};

/// The market listing snapshot.
pub fn quotes() -> Vec<Quote> {
    vec![
        Quote::new("AAPL", "Apple Inc.", 175.43, 2.15, 1.24, 45_234_567)
            .with_market_cap(2.8e12)
            .with_52_week_range(124.17, 198.23),
        Quote::new("GOOGL", "Alphabet Inc.", 2847.32, -15.67, -0.55, 1_234_567)
            .with_market_cap(1.8e12)
            .with_52_week_range(2193.62, 3030.93),
        Quote::new("MSFT", "Microsoft Corporation", 378.85, 5.23, 1.4, 23_456_789)
            .with_market_cap(2.9e12),
        Quote::new("TSLA", "Tesla, Inc.", 248.42, -8.91, -3.46, 34_567_890)
            .with_market_cap(8e11),
        Quote::new("AMZN", "Amazon.com, Inc.", 3247.15, 12.45, 0.38, 12_345_678)
            .with_market_cap(1.6e12),
        Quote::new("META", "Meta Platforms, Inc.", 487.23, -7.89, -1.59, 18_765_432)
            .with_market_cap(1.2e12),
        Quote::new("NVDA", "NVIDIA Corporation", 875.64, 23.45, 2.75, 28_901_234)
            .with_market_cap(2.2e12),
        Quote::new("NFLX", "Netflix, Inc.", 456.78, -3.21, -0.7, 8_765_432)
            .with_market_cap(2e11),
        Quote::new("CRM", "Salesforce, Inc.", 234.56, 4.32, 1.88, 5_432_109)
            .with_market_cap(2.3e11),
        Quote::new("UBER", "Uber Technologies, Inc.", 67.89, 1.23, 1.85, 15_432_109)
            .with_market_cap(1.4e11),
        Quote::new("SPOT", "Spotify Technology S.A.", 189.45, -2.34, -1.22, 3_210_987)
            .with_market_cap(3.6e10),
        Quote::new("ZOOM", "Zoom Video Communications, Inc.", 78.9, 0.56, 0.71, 4_321_098)
            .with_market_cap(2.3e10),
    ]
}

/// Company profiles for the stock detail page.
pub fn profiles() -> Vec<StockProfile> {
    let listed = quotes();
    let quote_for = |symbol: &str| {
        listed
            .iter()
            .find(|q| q.symbol == symbol)
            .cloned()
            .unwrap_or_else(|| StockProfile::placeholder(symbol).quote)
    };

    vec![
        StockProfile {
            quote: quote_for("AAPL"),
            pe_ratio: 28.5,
            dividend: 0.96,
            beta: 1.2,
            description: "Apple Inc. designs, manufactures, and markets smartphones, personal \
                          computers, tablets, wearables, and accessories worldwide."
                .to_string(),
            sector: "Technology".to_string(),
            employees: 164_000,
            founded: "1976".to_string(),
            headquarters: "Cupertino, CA".to_string(),
        },
        StockProfile {
            quote: quote_for("GOOGL"),
            pe_ratio: 25.8,
            dividend: 0.0,
            beta: 1.1,
            description: "Alphabet Inc. provides online advertising services in the United \
                          States, Europe, the Middle East, Africa, the Asia-Pacific, Canada, \
                          and Latin America."
                .to_string(),
            sector: "Technology".to_string(),
            employees: 190_234,
            founded: "1998".to_string(),
            headquarters: "Mountain View, CA".to_string(),
        },
    ]
}
