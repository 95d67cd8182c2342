use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::StudentNumber;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an id from any non-blank string.
            pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!($label, " cannot be empty")));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

// Identity
define_id!(UserId, "User id");

impl UserId {
    /// User id synthesized from a student number: `user_<number>`.
    pub fn for_student(student_number: &StudentNumber) -> Self {
        Self(format!("user_{}", student_number))
    }
}

// Learning content
define_id!(ActivityId, "Activity id");

impl ActivityId {
    /// Id for a slug baked into the activity catalog.
    pub fn from_static(slug: &'static str) -> Self {
        Self(slug.to_string())
    }
}

// User-authored and admin-uploaded records
define_id!(RecordId, "Record id");

impl RecordId {
    /// Generate a timestamp-based id: `<millis>-<4 hex digits>`.
    ///
    /// `rng` must return a value in `[0, 65535]`; values outside the range are masked.
    pub fn generate(now_millis: u64, mut rng: impl FnMut() -> u32) -> Self {
        Self(format!("{}-{:04x}", now_millis, rng() & 0xffff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_id_is_rejected() {
        assert!(ActivityId::new("   ").is_err());
        assert_eq!(ActivityId::new(" counting ").unwrap().as_str(), "counting");
    }

    #[test]
    fn test_record_id_is_timestamp_prefixed() {
        let id = RecordId::generate(1_700_000_000_123, || 0xbeef);
        assert_eq!(id.as_str(), "1700000000123-beef");
    }

    #[test]
    fn test_record_id_masks_random_part() {
        let id = RecordId::generate(5, || 0x1_0001);
        assert_eq!(id.as_str(), "5-0001");
    }

    #[test]
    fn test_ids_deserialize_with_validation() {
        let ok: UserId = serde_json::from_str("\"user_1\"").unwrap();
        assert_eq!(ok.as_str(), "user_1");
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
