use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A market news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: String,
    #[serde(default)]
    pub related_symbols: Vec<String>,
}

/// News categories. Articles are not tagged; each category is derived
/// from the title or the publishing source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    #[default]
    All,
    /// Title mentions "earnings"
    Earnings,
    /// TechCrunch, The Verge
    Technology,
    /// Bloomberg, Wall Street Journal
    Markets,
    /// Reuters
    Economy,
    /// CoinDesk
    Crypto,
}

impl NewsCategory {
    pub fn matches(&self, item: &NewsItem) -> bool {
        match self {
            NewsCategory::All => true,
            NewsCategory::Earnings => item.title.to_lowercase().contains("earnings"),
            NewsCategory::Technology => matches!(item.source.as_str(), "TechCrunch" | "The Verge"),
            NewsCategory::Markets => {
                matches!(item.source.as_str(), "Bloomberg" | "Wall Street Journal")
            }
            NewsCategory::Economy => item.source == "Reuters",
            NewsCategory::Crypto => item.source == "CoinDesk",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSort {
    #[default]
    Newest,
    Oldest,
}

/// Search/category/sort state of the news page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsQuery {
    pub search: String,
    pub category: NewsCategory,
    pub sort: NewsSort,
}
