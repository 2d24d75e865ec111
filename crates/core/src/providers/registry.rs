use std::collections::HashMap;

use log::debug;

use crate::catalog;
use crate::models::quote::{Quote, StockProfile};

use super::traits::QuoteProvider;

/// Static symbol → quote mapping.
///
/// Listing order is insertion order. Lookups are case-insensitive; symbols
/// are stored uppercased. There is no update lifecycle: [`replace_all`]
/// swaps the whole snapshot set at once.
///
/// [`replace_all`]: QuoteRegistry::replace_all
pub struct QuoteRegistry {
    quotes: Vec<Quote>,
    index: HashMap<String, usize>,
    profiles: HashMap<String, StockProfile>,
}

impl QuoteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            index: HashMap::new(),
            profiles: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with the built-in market snapshot and
    /// company profiles.
    pub fn new_with_defaults() -> Self {
        let mut registry = Self::new();
        for quote in catalog::market::quotes() {
            registry.insert(quote);
        }
        for profile in catalog::market::profiles() {
            registry.insert_profile(profile);
        }
        registry
    }

    /// Add a quote, or replace the snapshot for an already known symbol
    /// in place (listing position is kept).
    pub fn insert(&mut self, mut quote: Quote) {
        quote.symbol = quote.symbol.to_uppercase();
        match self.index.get(&quote.symbol) {
            Some(&idx) => self.quotes[idx] = quote,
            None => {
                self.index.insert(quote.symbol.clone(), self.quotes.len());
                self.quotes.push(quote);
            }
        }
    }

    /// Register a company profile. Its embedded quote is not added to the
    /// listing.
    pub fn insert_profile(&mut self, profile: StockProfile) {
        self.profiles
            .insert(profile.quote.symbol.to_uppercase(), profile);
    }

    /// Replace every snapshot at once.
    pub fn replace_all(&mut self, quotes: Vec<Quote>) {
        debug!("replacing {} quotes with {}", self.quotes.len(), quotes.len());
        self.quotes.clear();
        self.index.clear();
        for quote in quotes {
            self.insert(quote);
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.index
            .get(&symbol.trim().to_uppercase())
            .map(|&idx| &self.quotes[idx])
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// All quotes in listing order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Detail record for the stock page.
    ///
    /// Falls back to a listed quote wrapped in a generic profile, then to
    /// [`StockProfile::placeholder`] for symbols the registry has never seen.
    /// A listed symbol always carries its current quote, so a profile never
    /// outlives a `replace_all` or `insert`.
    pub fn profile(&self, symbol: &str) -> StockProfile {
        let upper = symbol.trim().to_uppercase();
        let mut profile = self
            .profiles
            .get(&upper)
            .cloned()
            .unwrap_or_else(|| StockProfile::placeholder(&upper));
        if let Some(quote) = self.get(&upper) {
            profile.quote = quote.clone();
        }
        profile
    }

    /// Whether a dedicated profile exists (not the placeholder).
    pub fn has_profile(&self, symbol: &str) -> bool {
        self.profiles.contains_key(&symbol.trim().to_uppercase())
    }
}

impl Default for QuoteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteProvider for QuoteRegistry {
    fn name(&self) -> &str {
        "Static quote registry"
    }

    fn get_quote(&self, symbol: &str) -> Option<Quote> {
        self.get(symbol).cloned()
    }

    fn list_quotes(&self) -> Vec<Quote> {
        self.quotes.clone()
    }
}
