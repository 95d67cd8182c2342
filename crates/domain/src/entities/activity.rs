//! Activities and their transient results

use serde::{Deserialize, Serialize};

use crate::ids::ActivityId;
use crate::value_objects::Difficulty;

/// Points earned per correct answer before the difficulty multiplier
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Game,
    Quiz,
}

/// Outcome of one finished activity.
///
/// Produced by a screen, folded into `Progress`, then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityResult {
    pub activity_id: ActivityId,
    pub correct: u32,
    pub total: u32,
    pub points: u32,
}

impl ActivityResult {
    /// Score a round: `correct * 10 * multiplier`.
    ///
    /// `correct` is clamped to `total`.
    pub fn scored(activity_id: ActivityId, correct: u32, total: u32, difficulty: Difficulty) -> Self {
        let correct = correct.min(total);
        let points = correct
            .saturating_mul(POINTS_PER_CORRECT)
            .saturating_mul(difficulty.multiplier());
        Self {
            activity_id,
            correct,
            total,
            points,
        }
    }

    /// Share of correct answers, 0-100
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((u64::from(self.correct) * 100) / u64::from(self.total)).min(100) as u8
    }
}
