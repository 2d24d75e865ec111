use serde::{Deserialize, Serialize};

/// Market valuation of a single holding against its current quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub symbol: String,
    pub name: String,
    pub quantity: u64,
    pub average_price: f64,

    /// Price taken from the quote registry
    pub current_price: f64,

    /// current_price × quantity
    pub total_value: f64,

    /// total_value − average_price × quantity
    #[serde(rename = "unrealizedPL")]
    pub unrealized_pl: f64,

    /// unrealized_pl / cost basis × 100; `None` when the cost basis is zero
    #[serde(rename = "unrealizedPLPercent")]
    pub unrealized_pl_percent: Option<f64>,
}

impl PositionValuation {
    pub fn cost_basis(&self) -> f64 {
        self.quantity as f64 * self.average_price
    }
}

/// Valuation of the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Per-holding valuations, in the order the holdings were given
    pub positions: Vec<PositionValuation>,

    /// Σ total_value
    pub total_value: f64,

    /// Σ unrealized_pl
    #[serde(rename = "totalUnrealizedPL")]
    pub total_unrealized_pl: f64,

    /// total_unrealized_pl / (total_value − total_unrealized_pl) × 100.
    /// `None` ("no data") for an empty portfolio or a non-positive cost basis.
    #[serde(rename = "totalUnrealizedPLPercent")]
    pub total_unrealized_pl_percent: Option<f64>,
}

impl PortfolioSummary {
    /// Total cost basis, recovered as total_value − total_unrealized_pl.
    pub fn total_cost(&self) -> f64 {
        self.total_value - self.total_unrealized_pl
    }
}

/// Share of total portfolio value held in one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub symbol: String,
    pub total_value: f64,
    /// total_value / portfolio total × 100
    pub percent: f64,
}

/// Gains/losses filter on the holdings table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionFilter {
    #[default]
    All,
    /// unrealized P&L > 0
    Gains,
    /// unrealized P&L < 0
    Losses,
}

/// Sort order for the holdings table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSort {
    /// Largest market value first
    #[default]
    Value,
    /// Largest unrealized P&L first
    Pl,
    /// Alphabetical
    Symbol,
}

/// Search/filter/sort state of the portfolio page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionQuery {
    pub search: String,
    pub filter: PositionFilter,
    pub sort: PositionSort,
}
