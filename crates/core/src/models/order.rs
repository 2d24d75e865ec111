use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

/// How the order is priced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Executes at the current quoted price
    #[default]
    Market,
    /// Executes only at the user-supplied price or better
    Limit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Market => write!(f, "market"),
            OrderType::Limit => write!(f, "limit"),
        }
    }
}

/// An order as entered on the trade form. Exists only while it is being
/// evaluated; nothing here is ever persisted.
///
/// `quantity` and `limit_price` are optional because the form fields can be
/// left empty; the evaluator rejects what is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Option<i64>,
    pub limit_price: Option<f64>,
}

impl OrderRequest {
    pub fn market(side: OrderSide, symbol: impl Into<String>, quantity: i64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity: Some(quantity),
            limit_price: None,
        }
    }

    pub fn limit(side: OrderSide, symbol: impl Into<String>, quantity: i64, limit_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity: Some(quantity),
            limit_price: Some(limit_price),
        }
    }

    /// Build a request from raw form text. Blank fields become `None`;
    /// text that is not a number is rejected.
    pub fn from_form(
        side: OrderSide,
        order_type: OrderType,
        symbol: &str,
        quantity: &str,
        limit_price: &str,
    ) -> Result<Self, CoreError> {
        let quantity = match quantity.trim() {
            "" => None,
            q => Some(q.parse::<i64>().map_err(|_| {
                CoreError::ValidationError(format!("Quantity '{q}' is not a whole number"))
            })?),
        };
        let limit_price = match limit_price.trim() {
            "" => None,
            p => Some(p.parse::<f64>().map_err(|_| {
                CoreError::ValidationError(format!("Limit price '{p}' is not a number"))
            })?),
        };
        Ok(Self {
            symbol: symbol.trim().to_string(),
            side,
            order_type,
            quantity,
            limit_price,
        })
    }
}

/// The priced result of an accepted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: u64,

    /// Current price for market orders, the limit price for limit orders
    pub effective_price: f64,

    /// quantity × effective_price
    pub total_amount: f64,
}
