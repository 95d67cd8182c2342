//! Daily plan - a checklist for one calendar day

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::RecordId;
use crate::value_objects::StudentNumber;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub id: RecordId,
    pub student_number: StudentNumber,
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<PlanItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DailyPlan {
    pub fn new(
        id: RecordId,
        student_number: StudentNumber,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            student_number,
            date,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_item(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Result<(), DomainError> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Plan item cannot be empty"));
        }
        self.items.push(PlanItem {
            text: trimmed.to_string(),
            done: false,
        });
        self.updated_at = now;
        Ok(())
    }

    pub fn toggle_item(&mut self, index: usize, now: DateTime<Utc>) -> Result<(), DomainError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| out_of_range(index, len))?;
        item.done = !item.done;
        self.updated_at = now;
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize, now: DateTime<Utc>) -> Result<PlanItem, DomainError> {
        if index >= self.items.len() {
            return Err(out_of_range(index, self.items.len()));
        }
        self.updated_at = now;
        Ok(self.items.remove(index))
    }

    /// Share of items marked done, 0-100. An empty plan is 0.
    pub fn completion_percent(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        let done = self.items.iter().filter(|item| item.done).count();
        ((done * 100) / self.items.len()) as u8
    }
}

fn out_of_range(index: usize, len: usize) -> DomainError {
    DomainError::validation(format!(
        "Plan item {} does not exist (plan has {} items)",
        index, len
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn plan() -> DailyPlan {
        DailyPlan::new(
            RecordId::generate(1, || 2),
            StudentNumber::parse("1234567890123456").unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            at(0),
        )
    }

    #[test]
    fn toggle_and_completion() {
        let mut plan = plan();
        plan.add_item("Kitap oku", at(1)).unwrap();
        plan.add_item("Resim yap", at(2)).unwrap();
        plan.toggle_item(0, at(3)).unwrap();
        assert_eq!(plan.completion_percent(), 50);
        assert_eq!(plan.updated_at, at(3));

        plan.toggle_item(0, at(4)).unwrap();
        assert_eq!(plan.completion_percent(), 0);
    }

    #[test]
    fn out_of_range_index_is_validation_error() {
        let mut plan = plan();
        assert!(matches!(
            plan.toggle_item(3, at(1)),
            Err(DomainError::Validation(_))
        ));
        assert!(plan.remove_item(0, at(1)).is_err());
    }

    #[test]
    fn blank_item_is_rejected() {
        let mut plan = plan();
        assert!(plan.add_item("   ", at(1)).is_err());
        assert!(plan.items.is_empty());
    }

    #[test]
    fn remove_returns_item() {
        let mut plan = plan();
        plan.add_item("Spor", at(1)).unwrap();
        let removed = plan.remove_item(0, at(2)).unwrap();
        assert_eq!(removed.text, "Spor");
        assert!(plan.items.is_empty());
    }
}
