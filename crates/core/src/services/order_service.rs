use std::time::Duration;

use log::{debug, info};

use crate::errors::CoreError;
use crate::models::order::{OrderRequest, OrderSide, OrderSummary, OrderType};
use crate::models::portfolio::Portfolio;
use crate::models::trade::Trade;
use crate::providers::traits::QuoteProvider;

/// Validates trade-form orders and prices them.
///
/// Evaluation never touches balances or holdings. Submission only waits
/// out the simulated latency and hands back a receipt.
pub struct OrderService {
    submit_delay: Duration,
}

impl OrderService {
    pub fn new(submit_delay: Duration) -> Self {
        Self { submit_delay }
    }

    /// Check an order against the quote registry and the account.
    ///
    /// Rejects, in order:
    /// - empty symbol or missing quantity
    /// - a symbol the registry does not know (`Invalid stock symbol`)
    /// - quantity ≤ 0
    /// - a limit order without a positive limit price
    /// - a buy costing more than `available_balance`
    /// - a sell of more shares than `portfolio` holds
    ///
    /// The effective price is the quoted price for market orders and the
    /// limit price for limit orders.
    pub fn evaluate(
        &self,
        request: &OrderRequest,
        quotes: &dyn QuoteProvider,
        available_balance: f64,
        portfolio: &Portfolio,
    ) -> Result<OrderSummary, CoreError> {
        let symbol = request.symbol.trim().to_uppercase();
        let quantity = match request.quantity {
            Some(q) if !symbol.is_empty() => q,
            _ => {
                return Err(CoreError::ValidationError(
                    "Please fill in all required fields".into(),
                ))
            }
        };

        let quote = quotes
            .get_quote(&symbol)
            .ok_or_else(|| CoreError::ValidationError("Invalid stock symbol".into()))?;

        if quantity <= 0 {
            return Err(CoreError::ValidationError(
                "Quantity must be greater than 0".into(),
            ));
        }
        let quantity = quantity as u64;

        let effective_price = match request.order_type {
            OrderType::Market => quote.price,
            OrderType::Limit => match request.limit_price {
                Some(p) if p.is_finite() && p > 0.0 => p,
                _ => {
                    return Err(CoreError::ValidationError(
                        "Please enter a valid limit price".into(),
                    ))
                }
            },
        };
        let total_amount = quantity as f64 * effective_price;

        match request.side {
            OrderSide::Buy => {
                if total_amount > available_balance {
                    return Err(CoreError::InsufficientFunds {
                        required: total_amount,
                        available: available_balance,
                    });
                }
            }
            OrderSide::Sell => {
                let held = portfolio.quantity_of(&symbol);
                if held < quantity {
                    return Err(CoreError::InsufficientHoldings {
                        symbol,
                        requested: quantity,
                        held,
                    });
                }
            }
        }

        debug!(
            "accepted {} {} order: {} {} @ {:.2}",
            request.order_type, request.side, quantity, symbol, effective_price
        );

        Ok(OrderSummary {
            symbol,
            side: request.side,
            order_type: request.order_type,
            quantity,
            effective_price,
            total_amount,
        })
    }

    /// How much more cash a buy would need, 0 when it is affordable or is
    /// a sell.
    pub fn shortfall(&self, summary: &OrderSummary, available_balance: f64) -> f64 {
        match summary.side {
            OrderSide::Buy => (summary.total_amount - available_balance).max(0.0),
            OrderSide::Sell => 0.0,
        }
    }

    /// Simulate sending an accepted order. Waits the configured delay and
    /// returns a pending receipt; no balance or holding changes.
    pub async fn submit(&self, user_id: &str, summary: &OrderSummary) -> Trade {
        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }
        let trade = Trade::submitted(user_id, summary);
        info!(
            "order {} submitted: {} {} {} @ {:.2} (total {:.2})",
            trade.id,
            trade.side,
            trade.quantity,
            trade.symbol,
            trade.price,
            trade.total_amount
        );
        trade
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
