//! Achievement tiers derived from the cumulative score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Achievement tier shown next to the child's name.
///
/// Always derived from score, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTier {
    Novice,
    Apprentice,
    Explorer,
    Inventor,
    MasterInventor,
}

impl AchievementTier {
    /// Tiers with the minimum score that unlocks them, ascending.
    pub const THRESHOLDS: [(AchievementTier, u32); 5] = [
        (AchievementTier::Novice, 0),
        (AchievementTier::Apprentice, 100),
        (AchievementTier::Explorer, 300),
        (AchievementTier::Inventor, 600),
        (AchievementTier::MasterInventor, 1000),
    ];

    pub fn from_score(score: u32) -> Self {
        Self::THRESHOLDS
            .iter()
            .rev()
            .find(|(_, min)| score >= *min)
            .map(|(tier, _)| *tier)
            .unwrap_or(AchievementTier::Novice)
    }

    /// Score needed for the next tier, or `None` at the top
    pub fn next_threshold(&self) -> Option<u32> {
        Self::THRESHOLDS
            .iter()
            .find(|(tier, _)| tier > self)
            .map(|(_, min)| *min)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AchievementTier::Novice => "Çaylak",
            AchievementTier::Apprentice => "Çırak",
            AchievementTier::Explorer => "Kaşif",
            AchievementTier::Inventor => "Mucit",
            AchievementTier::MasterInventor => "Usta Mucit",
        }
    }
}

impl fmt::Display for AchievementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
