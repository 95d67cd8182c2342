//! Value objects - Immutable objects defined by their attributes

mod achievement;
mod age_group;
mod names;
mod student_number;
mod tool;

pub use achievement::AchievementTier;
pub use age_group::{AgeGroup, Difficulty};
pub use names::{AvatarId, Username};
pub use student_number::{StudentNumber, STUDENT_NUMBER_LEN};
pub use tool::ToolId;
