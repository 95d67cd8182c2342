//! Identity and profile of a child using the app

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::UserId;
use crate::value_objects::{AvatarId, StudentNumber, Username};

/// Who is using the app right now.
///
/// The student number is fixed for the lifetime of the identity:
/// renaming or changing the avatar keeps it (and the user id) as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub username: Username,
    pub avatar: AvatarId,
    pub student_number: StudentNumber,
}

impl Identity {
    pub fn new(
        user_id: UserId,
        username: Username,
        avatar: AvatarId,
        student_number: StudentNumber,
    ) -> Self {
        Self {
            user_id,
            username,
            avatar,
            student_number,
        }
    }

    /// Build an identity for a freshly generated student number,
    /// deriving the user id from it.
    pub fn for_new_student(
        username: Username,
        avatar: AvatarId,
        student_number: StudentNumber,
    ) -> Self {
        let user_id = UserId::for_student(&student_number);
        Self::new(user_id, username, avatar, student_number)
    }

    pub fn rename(&self, username: Username) -> Self {
        Self {
            username,
            ..self.clone()
        }
    }

    pub fn change_avatar(&self, avatar: AvatarId) -> Self {
        Self {
            avatar,
            ..self.clone()
        }
    }

    /// Rebuild an identity from raw stored strings.
    ///
    /// `user_id` may be missing, in which case it is derived from the
    /// student number.
    pub fn from_parts(
        user_id: Option<&str>,
        username: &str,
        avatar: &str,
        student_number: &str,
    ) -> Result<Self, DomainError> {
        let student_number = StudentNumber::parse(student_number)?;
        let user_id = match user_id {
            Some(id) if !id.trim().is_empty() => UserId::new(id)?,
            _ => UserId::for_student(&student_number),
        };
        Ok(Self::new(
            user_id,
            Username::new(username)?,
            AvatarId::new(avatar)?,
            student_number,
        ))
    }
}

/// Profile as kept by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub identity: Identity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(identity: Identity, now: DateTime<Utc>) -> Self {
        Self {
            identity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the identity, keeping the original creation time.
    pub fn updated(&self, identity: Identity, now: DateTime<Utc>) -> Self {
        Self {
            identity,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity::for_new_student(
            Username::new("Ada").unwrap(),
            AvatarId::new("robot").unwrap(),
            StudentNumber::parse("1234567890123456").unwrap(),
        )
    }

    #[test]
    fn user_id_is_derived_from_student_number() {
        assert_eq!(identity().user_id.as_str(), "user_1234567890123456");
    }

    #[test]
    fn rename_keeps_student_number() {
        let original = identity();
        let renamed = original.rename(Username::new("Ayşe").unwrap());
        assert_eq!(renamed.student_number, original.student_number);
        assert_eq!(renamed.user_id, original.user_id);
        assert_eq!(renamed.username.as_str(), "Ayşe");
    }

    #[test]
    fn from_parts_synthesizes_missing_user_id() {
        let restored = Identity::from_parts(None, "Ada", "robot", "1234567890123456").unwrap();
        assert_eq!(restored, identity());

        let blank = Identity::from_parts(Some(" "), "Ada", "robot", "1234567890123456").unwrap();
        assert_eq!(blank.user_id.as_str(), "user_1234567890123456");
    }

    #[test]
    fn from_parts_keeps_stored_user_id() {
        let restored =
            Identity::from_parts(Some("legacy-7"), "Ada", "robot", "1234567890123456").unwrap();
        assert_eq!(restored.user_id.as_str(), "legacy-7");
    }

    #[test]
    fn from_parts_rejects_invalid_student_number() {
        assert!(Identity::from_parts(None, "Ada", "robot", "12").is_err());
    }

    #[test]
    fn profile_serializes_flat() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let json = serde_json::to_value(Profile::new(identity(), now)).unwrap();
        assert_eq!(json["student_number"], "1234567890123456");
        assert_eq!(json["username"], "Ada");
    }
}
