use serde::{Deserialize, Serialize};

/// A position in one symbol: how many shares and at what average cost.
///
/// Current price is never stored here; it is looked up from the quote
/// registry at valuation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, uppercased
    pub symbol: String,

    /// Display name of the company
    pub name: String,

    /// Whole shares held
    pub quantity: u64,

    /// Average cost per share (>= 0)
    pub average_price: f64,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: u64,
        average_price: f64,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            name: name.into(),
            quantity,
            average_price,
        }
    }

    /// quantity × average price
    pub fn cost_basis(&self) -> f64 {
        self.quantity as f64 * self.average_price
    }
}

/// The set of holdings belonging to the signed-in account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Holdings in display order
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    /// Shares held for `symbol` (case-insensitive), 0 when not held.
    pub fn quantity_of(&self, symbol: &str) -> u64 {
        let symbol = symbol.trim();
        self.holdings
            .iter()
            .filter(|h| h.symbol.eq_ignore_ascii_case(symbol))
            .map(|h| h.quantity)
            .sum()
    }

    pub fn get(&self, symbol: &str) -> Option<&Holding> {
        let symbol = symbol.trim();
        self.holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
