use crate::models::tutorial::{Tutorial, TutorialQuery};

/// Category/level filtering and progress for the tutorials page.
pub struct TutorialService;

impl TutorialService {
    pub fn new() -> Self {
        Self
    }

    pub fn filter<'a>(&self, tutorials: &'a [Tutorial], query: &TutorialQuery) -> Vec<&'a Tutorial> {
        tutorials
            .iter()
            .filter(|t| query.category.map_or(true, |c| t.category == c))
            .filter(|t| query.level.map_or(true, |l| t.level == l))
            .collect()
    }

    /// Completed lessons over all lessons, in percent. 0 with no lessons.
    pub fn overall_progress(&self, tutorials: &[Tutorial]) -> f64 {
        let total: u32 = tutorials.iter().map(|t| t.lessons).sum();
        let completed: u32 = tutorials.iter().map(|t| t.completed).sum();
        if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn total_lessons(&self, tutorials: &[Tutorial]) -> u32 {
        tutorials.iter().map(|t| t.lessons).sum()
    }
}

impl Default for TutorialService {
    fn default() -> Self {
        Self::new()
    }
}
