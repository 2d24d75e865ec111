use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::order::{OrderSide, OrderSummary};

/// Lifecycle state of a submitted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Pending,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeStatus::Pending => write!(f, "pending"),
            TradeStatus::Completed => write!(f, "completed"),
            TradeStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A trade record as listed under "recent orders".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub quantity: u64,
    pub price: f64,
    pub total_amount: f64,
    pub timestamp: DateTime<Utc>,
    pub status: TradeStatus,
}

impl Trade {
    /// Receipt for a freshly submitted order. Always `Pending`: nothing
    /// settles it.
    pub fn submitted(user_id: impl Into<String>, summary: &OrderSummary) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            symbol: summary.symbol.clone(),
            side: summary.side,
            quantity: summary.quantity,
            price: summary.effective_price,
            total_amount: summary.total_amount,
            timestamp: Utc::now(),
            status: TradeStatus::Pending,
        }
    }
}
