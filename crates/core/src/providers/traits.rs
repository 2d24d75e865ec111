use crate::models::quote::Quote;

/// Source of quote snapshots.
///
/// The portfolio aggregator and the order evaluator only ever look prices
/// up through this trait, so a live feed can replace the static registry
/// without touching them.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Latest snapshot for `symbol` (case-insensitive), if known.
    fn get_quote(&self, symbol: &str) -> Option<Quote>;

    /// Every known quote, in listing order.
    fn list_quotes(&self) -> Vec<Quote>;

    /// Current price for `symbol`, if known.
    fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get_quote(symbol).map(|q| q.price)
    }
}
