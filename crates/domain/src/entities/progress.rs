//! Cumulative learning progress

use serde::{Deserialize, Serialize};

use crate::entities::ActivityResult;
use crate::ids::ActivityId;
use crate::value_objects::AchievementTier;

/// Cumulative progress of one child.
///
/// Score only grows when results are folded in; the tier is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub score: u32,
    #[serde(default)]
    pub completed_activities: Vec<ActivityId>,
    #[serde(default)]
    pub percent: u8,
}

impl Progress {
    pub fn new(score: u32, completed_activities: Vec<ActivityId>, percent: u8) -> Self {
        Self {
            score,
            completed_activities,
            percent: percent.min(100),
        }
    }

    pub fn tier(&self) -> AchievementTier {
        AchievementTier::from_score(self.score)
    }

    pub fn has_completed(&self, activity: &ActivityId) -> bool {
        self.completed_activities.contains(activity)
    }

    /// Fold a finished activity into the running totals.
    ///
    /// `catalog_size` is the total number of activities across all age groups;
    /// it drives the percentage.
    pub fn fold(&mut self, result: &ActivityResult, catalog_size: usize) {
        self.score = self.score.saturating_add(result.points);
        if !self.has_completed(&result.activity_id) {
            self.completed_activities.push(result.activity_id.clone());
        }
        self.percent = completion_percent(self.completed_activities.len(), catalog_size);
    }

    /// Add points that do not belong to a catalog activity (daily exam).
    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

fn completion_percent(completed: usize, catalog_size: usize) -> u8 {
    if catalog_size == 0 {
        return 0;
    }
    ((completed.saturating_mul(100)) / catalog_size).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Difficulty;

    fn result(id: &str, correct: u32) -> ActivityResult {
        ActivityResult::scored(ActivityId::new(id).unwrap(), correct, 5, Difficulty::Easy)
    }

    #[test]
    fn fold_accumulates_score_and_tier() {
        let mut progress = Progress::default();
        progress.fold(&result("shapes", 5), 10);
        progress.fold(&result("colors", 5), 10);
        assert_eq!(progress.score, 100);
        assert_eq!(progress.tier(), AchievementTier::Apprentice);
    }

    #[test]
    fn fold_records_activity_once() {
        let mut progress = Progress::default();
        progress.fold(&result("shapes", 1), 4);
        progress.fold(&result("shapes", 2), 4);
        assert_eq!(progress.completed_activities.len(), 1);
        assert_eq!(progress.percent, 25);
        assert_eq!(progress.score, 30);
    }

    #[test]
    fn score_never_decreases() {
        let mut progress = Progress::new(u32::MAX - 5, vec![], 0);
        progress.fold(&result("shapes", 5), 1);
        assert_eq!(progress.score, u32::MAX);
    }

    #[test]
    fn percent_handles_empty_catalog() {
        let mut progress = Progress::default();
        progress.fold(&result("shapes", 1), 0);
        assert_eq!(progress.percent, 0);
    }

    #[test]
    fn percent_is_capped() {
        let mut progress = Progress::default();
        progress.fold(&result("a", 1), 1);
        progress.fold(&result("b", 1), 1);
        assert_eq!(progress.percent, 100);
    }

    #[test]
    fn missing_fields_default_on_deserialize() {
        let progress: Progress = serde_json::from_str(r#"{"score": 42}"#).unwrap();
        assert_eq!(progress.score, 42);
        assert!(progress.completed_activities.is_empty());
    }
}
