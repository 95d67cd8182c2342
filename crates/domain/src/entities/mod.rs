//! Domain entities - Core business objects with identity

mod activity;
mod daily_plan;
mod exam_result;
mod identity;
mod note;
mod progress;
mod sound_asset;

pub use activity::{ActivityKind, ActivityResult, POINTS_PER_CORRECT};
pub use daily_plan::{DailyPlan, PlanItem};
pub use exam_result::{ExamResult, DAILY_EXAM_QUESTIONS};
pub use identity::{Identity, Profile};
pub use note::Note;
pub use progress::Progress;
pub use sound_asset::{AudioFile, NewAudioFile, NewSoundAsset, SoundAsset};
