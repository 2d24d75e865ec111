use crate::models::quote::{MarketFilter, MarketQuery, MarketSort, MarketStats, Quote};

/// Search, filter and sort over the market listing.
pub struct MarketService;

impl MarketService {
    pub fn new() -> Self {
        Self
    }

    /// Apply the market page's search text, gainers/losers filter and sort.
    ///
    /// Search is a case-insensitive substring match on symbol or name.
    /// Ties keep listing order.
    pub fn search<'a>(&self, quotes: &'a [Quote], query: &MarketQuery) -> Vec<&'a Quote> {
        let needle = query.search.trim().to_lowercase();
        let mut matches: Vec<&Quote> = quotes
            .iter()
            .filter(|q| {
                needle.is_empty()
                    || q.symbol.to_lowercase().contains(&needle)
                    || q.name.to_lowercase().contains(&needle)
            })
            .filter(|q| match query.filter {
                MarketFilter::All => true,
                MarketFilter::Gainers => q.is_gainer(),
                MarketFilter::Losers => q.is_loser(),
            })
            .collect();

        match query.sort {
            MarketSort::MarketCap => matches.sort_by(|a, b| {
                b.market_cap
                    .unwrap_or(0.0)
                    .total_cmp(&a.market_cap.unwrap_or(0.0))
            }),
            MarketSort::Price => matches.sort_by(|a, b| b.price.total_cmp(&a.price)),
            MarketSort::Change => matches.sort_by(|a, b| b.change.total_cmp(&a.change)),
            MarketSort::Volume => matches.sort_by(|a, b| b.volume.cmp(&a.volume)),
            MarketSort::Symbol => matches.sort_by(|a, b| a.symbol.cmp(&b.symbol)),
        }
        matches
    }

    /// Advancing / declining / flat counts over the whole listing.
    pub fn stats(&self, quotes: &[Quote]) -> MarketStats {
        let gainers = quotes.iter().filter(|q| q.is_gainer()).count();
        let losers = quotes.iter().filter(|q| q.is_loser()).count();
        MarketStats {
            gainers,
            losers,
            unchanged: quotes.len() - gainers - losers,
        }
    }
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new()
    }
}
