use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TutorialLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for TutorialLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorialLevel::Beginner => write!(f, "Beginner"),
            TutorialLevel::Intermediate => write!(f, "Intermediate"),
            TutorialLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorialCategory {
    Basics,
    Analysis,
    Risk,
    Portfolio,
    Advanced,
}

/// A course on the tutorials page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: TutorialLevel,
    pub category: TutorialCategory,
    /// Human-readable length, e.g. "30 min"
    pub duration: String,
    pub lessons: u32,
    pub completed: u32,
    pub rating: f64,
    pub students: u32,
    pub topics: Vec<String>,
}

impl Tutorial {
    /// Percentage of lessons completed, 0 for a tutorial with no lessons.
    pub fn progress_pct(&self) -> f64 {
        if self.lessons > 0 {
            self.completed as f64 / self.lessons as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Category/level filter state of the tutorials page. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialQuery {
    pub category: Option<TutorialCategory>,
    pub level: Option<TutorialLevel>,
}
