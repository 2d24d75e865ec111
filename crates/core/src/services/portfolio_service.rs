use log::debug;

use crate::errors::CoreError;
use crate::models::analytics::{
    AllocationSlice, PortfolioSummary, PositionFilter, PositionQuery, PositionSort,
    PositionValuation,
};
use crate::models::portfolio::Holding;
use crate::models::quote::Quote;
use crate::providers::traits::QuoteProvider;

/// Values holdings against current quotes and computes unrealized P&L.
///
/// No I/O. Prices come from a [`QuoteProvider`].
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Value one holding at the quote's price.
    ///
    /// - total value = price × quantity
    /// - unrealized P&L = total value − average price × quantity
    /// - unrealized P&L % = P&L / cost basis × 100, `None` for a zero cost basis
    pub fn value_position(&self, holding: &Holding, quote: &Quote) -> PositionValuation {
        let quantity = holding.quantity as f64;
        let total_value = quote.price * quantity;
        let cost = holding.average_price * quantity;
        let unrealized_pl = total_value - cost;
        let unrealized_pl_percent = if cost != 0.0 {
            Some(unrealized_pl / cost * 100.0)
        } else {
            None
        };

        PositionValuation {
            symbol: holding.symbol.clone(),
            name: holding.name.clone(),
            quantity: holding.quantity,
            average_price: holding.average_price,
            current_price: quote.price,
            total_value,
            unrealized_pl,
            unrealized_pl_percent,
        }
    }

    /// Value every holding and total the results.
    ///
    /// Positions keep the order of `holdings`. A holding whose symbol has
    /// no quote fails the whole summary with `UnknownSymbol`.
    pub fn summarize(
        &self,
        holdings: &[Holding],
        quotes: &dyn QuoteProvider,
    ) -> Result<PortfolioSummary, CoreError> {
        let mut positions = Vec::with_capacity(holdings.len());
        for holding in holdings {
            let quote = quotes
                .get_quote(&holding.symbol)
                .ok_or_else(|| CoreError::UnknownSymbol(holding.symbol.clone()))?;
            positions.push(self.value_position(holding, &quote));
        }

        let total_value: f64 = positions.iter().map(|p| p.total_value).sum();
        let total_unrealized_pl: f64 = positions.iter().map(|p| p.unrealized_pl).sum();

        // total_value − total_pl is the total cost basis; an empty or
        // zero-cost portfolio has no meaningful percentage.
        let total_cost = total_value - total_unrealized_pl;
        let total_unrealized_pl_percent = if total_cost > 0.0 {
            Some(total_unrealized_pl / total_cost * 100.0)
        } else {
            None
        };

        debug!(
            "valued {} positions via {}: total {:.2}, P&L {:.2}",
            positions.len(),
            quotes.name(),
            total_value,
            total_unrealized_pl
        );

        Ok(PortfolioSummary {
            positions,
            total_value,
            total_unrealized_pl,
            total_unrealized_pl_percent,
        })
    }

    /// Apply the holdings-table search, gains/losses filter and sort.
    ///
    /// Search is a case-insensitive substring match on symbol or name.
    pub fn filter_positions<'a>(
        &self,
        summary: &'a PortfolioSummary,
        query: &PositionQuery,
    ) -> Vec<&'a PositionValuation> {
        let needle = query.search.trim().to_lowercase();
        let mut positions: Vec<&PositionValuation> = summary
            .positions
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.symbol.to_lowercase().contains(&needle)
                    || p.name.to_lowercase().contains(&needle)
            })
            .filter(|p| match query.filter {
                PositionFilter::All => true,
                PositionFilter::Gains => p.unrealized_pl > 0.0,
                PositionFilter::Losses => p.unrealized_pl < 0.0,
            })
            .collect();

        match query.sort {
            PositionSort::Value => positions.sort_by(|a, b| b.total_value.total_cmp(&a.total_value)),
            PositionSort::Pl => positions.sort_by(|a, b| b.unrealized_pl.total_cmp(&a.unrealized_pl)),
            PositionSort::Symbol => positions.sort_by(|a, b| a.symbol.cmp(&b.symbol)),
        }
        positions
    }

    /// The `limit` largest positions by value, each as a share of the
    /// portfolio's total value. Empty when the total is not positive.
    pub fn allocation(&self, summary: &PortfolioSummary, limit: usize) -> Vec<AllocationSlice> {
        if summary.total_value <= 0.0 {
            return Vec::new();
        }
        let mut positions: Vec<&PositionValuation> = summary.positions.iter().collect();
        positions.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));
        positions
            .into_iter()
            .take(limit)
            .map(|p| AllocationSlice {
                symbol: p.symbol.clone(),
                total_value: p.total_value,
                percent: p.total_value / summary.total_value * 100.0,
            })
            .collect()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
