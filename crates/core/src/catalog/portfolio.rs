use crate::models::portfolio::{Holding, Portfolio};

/// Sample holdings shown to every signed-in account.
pub fn demo_portfolio() -> Portfolio {
    Portfolio::new(vec![
        Holding::new("AAPL", "Apple Inc.", 25, 165.5),
        Holding::new("GOOGL", "Alphabet Inc.", 5, 2900.0),
        Holding::new("MSFT", "Microsoft Corporation", 30, 370.25),
        Holding::new("TSLA", "Tesla, Inc.", 12, 275.8),
    ])
}
