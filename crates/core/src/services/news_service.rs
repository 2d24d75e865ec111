use chrono::{DateTime, Utc};

use crate::models::news::{NewsItem, NewsQuery, NewsSort};

/// Search and ordering for the news feed.
pub struct NewsService;

impl NewsService {
    pub fn new() -> Self {
        Self
    }

    /// Articles matching the query's search text (title, summary or source,
    /// case-insensitive) and category, sorted by publish time.
    pub fn search<'a>(&self, articles: &'a [NewsItem], query: &NewsQuery) -> Vec<&'a NewsItem> {
        let needle = query.search.trim().to_lowercase();
        let mut matches: Vec<&NewsItem> = articles
            .iter()
            .filter(|a| {
                needle.is_empty()
                    || a.title.to_lowercase().contains(&needle)
                    || a.summary.to_lowercase().contains(&needle)
                    || a.source.to_lowercase().contains(&needle)
            })
            .filter(|a| query.category.matches(a))
            .collect();

        match query.sort {
            NewsSort::Newest => matches.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
            NewsSort::Oldest => matches.sort_by(|a, b| a.published_at.cmp(&b.published_at)),
        }
        matches
    }

    /// Articles tagged with `symbol`, newest first.
    pub fn related_to<'a>(&self, articles: &'a [NewsItem], symbol: &str) -> Vec<&'a NewsItem> {
        let upper = symbol.trim().to_uppercase();
        let mut matches: Vec<&NewsItem> = articles
            .iter()
            .filter(|a| a.related_symbols.iter().any(|s| s.eq_ignore_ascii_case(&upper)))
            .collect();
        matches.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        matches
    }

    /// Number of articles tagged with at least one symbol.
    pub fn with_related_symbols(&self, articles: &[NewsItem]) -> usize {
        articles
            .iter()
            .filter(|a| !a.related_symbols.is_empty())
            .count()
    }

    /// "Just now", "{h}h ago" or "{d}d ago" relative to `now`.
    /// Timestamps in the future read as "Just now".
    pub fn relative_age(&self, published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let hours = (now - published_at).num_hours();
        if hours < 1 {
            "Just now".to_string()
        } else if hours < 24 {
            format!("{hours}h ago")
        } else {
            format!("{}d ago", hours / 24)
        }
    }
}

impl Default for NewsService {
    fn default() -> Self {
        Self::new()
    }
}
