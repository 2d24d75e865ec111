use chrono::{DateTime, TimeZone, Utc};

use crate::models::order::OrderSide;
use crate::models::trade::{Trade, TradeStatus};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn trade(
    id: &str,
    symbol: &str,
    side: OrderSide,
    quantity: u64,
    price: f64,
    status: TradeStatus,
    timestamp: DateTime<Utc>,
) -> Trade {
    Trade {
        id: id.to_string(),
        user_id: "demo".to_string(),
        symbol: symbol.to_string(),
        side,
        quantity,
        price,
        total_amount: quantity as f64 * price,
        timestamp,
        status,
    }
}

/// Recent orders on the trade page, newest first.
pub fn recent_orders() -> Vec<Trade> {
    vec![
        trade("1", "AAPL", OrderSide::Buy, 10, 173.28, TradeStatus::Completed, at(2024, 1, 7, 10, 30)),
        trade("2", "GOOGL", OrderSide::Sell, 2, 2863.0, TradeStatus::Completed, at(2024, 1, 7, 9, 15)),
        trade("3", "MSFT", OrderSide::Buy, 15, 373.62, TradeStatus::Pending, at(2024, 1, 6, 14, 45)),
    ]
}
