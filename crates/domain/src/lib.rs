//! Mucit Evreni domain types.
//!
//! Identity, progress and the records a child creates while learning.
//! Nothing in this crate touches storage, the network or the clock:
//! time and randomness are passed in by callers.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    ActivityKind, ActivityResult, AudioFile, DailyPlan, ExamResult, Identity, NewAudioFile,
    NewSoundAsset, Note, PlanItem, Profile, Progress, SoundAsset, DAILY_EXAM_QUESTIONS,
    POINTS_PER_CORRECT,
};
pub use error::DomainError;
pub use ids::{ActivityId, RecordId, UserId};
pub use value_objects::{
    AchievementTier, AgeGroup, AvatarId, Difficulty, StudentNumber, ToolId, Username,
    STUDENT_NUMBER_LEN,
};
