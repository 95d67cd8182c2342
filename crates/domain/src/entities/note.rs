//! Notes written by a child on the planning screen

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::RecordId;
use crate::value_objects::StudentNumber;

const MAX_TITLE_LENGTH: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub student_number: StudentNumber,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(
        id: RecordId,
        student_number: StudentNumber,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            student_number,
            title: validate_title(title.into())?,
            body: body.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Overwrite title and body.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.title = validate_title(title.into())?;
        self.body = body.into();
        self.updated_at = now;
        Ok(())
    }
}

fn validate_title(title: String) -> Result<String, DomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Note title cannot be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(DomainError::validation(format!(
            "Note title cannot exceed {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn note() -> Note {
        Note::new(
            RecordId::generate(1, || 1),
            StudentNumber::parse("1234567890123456").unwrap(),
            " Ödev ",
            "Matematik sayfa 12",
            at(100),
        )
        .unwrap()
    }

    #[test]
    fn new_trims_title() {
        assert_eq!(note().title, "Ödev");
    }

    #[test]
    fn edit_bumps_updated_at_only() {
        let mut note = note();
        note.edit("Ödev 2", "", at(200)).unwrap();
        assert_eq!(note.created_at, at(100));
        assert_eq!(note.updated_at, at(200));
        assert_eq!(note.title, "Ödev 2");
    }

    #[test]
    fn edit_rejects_blank_title_and_keeps_old_values() {
        let mut note = note();
        assert!(note.edit("  ", "x", at(200)).is_err());
        assert_eq!(note.title, "Ödev");
        assert_eq!(note.updated_at, at(100));
    }
}
