//! Daily exam results

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::POINTS_PER_CORRECT;
use crate::ids::RecordId;
use crate::value_objects::{AgeGroup, StudentNumber};

/// Number of questions in a daily exam
pub const DAILY_EXAM_QUESTIONS: u32 = 10;

/// Bonus multiplier for exam answers compared to a normal activity
const EXAM_MULTIPLIER: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: RecordId,
    pub student_number: StudentNumber,
    pub age_group: AgeGroup,
    /// Calendar day the exam counts for
    pub date: NaiveDate,
    pub correct: u32,
    pub total: u32,
    pub score: u32,
    pub taken_at: DateTime<Utc>,
}

impl ExamResult {
    pub fn new(
        id: RecordId,
        student_number: StudentNumber,
        age_group: AgeGroup,
        date: NaiveDate,
        correct: u32,
        total: u32,
        taken_at: DateTime<Utc>,
    ) -> Self {
        let correct = correct.min(total);
        Self {
            id,
            student_number,
            age_group,
            date,
            correct,
            total,
            score: correct
                .saturating_mul(POINTS_PER_CORRECT)
                .saturating_mul(EXAM_MULTIPLIER),
            taken_at,
        }
    }

    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((u64::from(self.correct) * 100) / u64::from(self.total)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_and_percent() {
        let result = ExamResult::new(
            RecordId::generate(1, || 3),
            StudentNumber::parse("1234567890123456").unwrap(),
            AgeGroup::Early,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            7,
            DAILY_EXAM_QUESTIONS,
            DateTime::from_timestamp(0, 0).unwrap(),
        );
        assert_eq!(result.score, 140);
        assert_eq!(result.percent(), 70);
    }

    #[test]
    fn correct_is_clamped() {
        let result = ExamResult::new(
            RecordId::generate(1, || 3),
            StudentNumber::parse("1234567890123456").unwrap(),
            AgeGroup::Early,
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            12,
            10,
            DateTime::from_timestamp(0, 0).unwrap(),
        );
        assert_eq!(result.correct, 10);
        assert_eq!(result.percent(), 100);
    }
}
