//! Remote data port - the store behind the app
//!
//! Everything is keyed by student number. Writes are fire-and-forget from the
//! UI's point of view: callers log failures and carry on.

use mucit_domain::{
    AudioFile, DailyPlan, ExamResult, NewAudioFile, NewSoundAsset, Note, Profile, Progress,
    RecordId, SoundAsset, StudentNumber,
};

use super::ApiError;

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RemoteDataPort: Send + Sync {
    // Profile
    async fn save_profile(&self, profile: &Profile) -> Result<(), ApiError>;
    async fn fetch_profile(&self, student: &StudentNumber) -> Result<Option<Profile>, ApiError>;

    // Progress
    async fn save_progress(&self, student: &StudentNumber, progress: &Progress)
        -> Result<(), ApiError>;
    async fn fetch_progress(&self, student: &StudentNumber) -> Result<Option<Progress>, ApiError>;

    // Notes
    async fn list_notes(&self, student: &StudentNumber) -> Result<Vec<Note>, ApiError>;
    async fn add_note(&self, note: &Note) -> Result<(), ApiError>;
    async fn update_note(&self, note: &Note) -> Result<(), ApiError>;
    async fn delete_note(&self, student: &StudentNumber, id: &RecordId) -> Result<(), ApiError>;

    // Daily plans
    async fn list_plans(&self, student: &StudentNumber) -> Result<Vec<DailyPlan>, ApiError>;
    async fn add_plan(&self, plan: &DailyPlan) -> Result<(), ApiError>;
    async fn update_plan(&self, plan: &DailyPlan) -> Result<(), ApiError>;
    async fn delete_plan(&self, student: &StudentNumber, id: &RecordId) -> Result<(), ApiError>;

    // Exam results
    async fn list_exam_results(&self, student: &StudentNumber)
        -> Result<Vec<ExamResult>, ApiError>;
    async fn add_exam_result(&self, result: &ExamResult) -> Result<(), ApiError>;
    async fn update_exam_result(&self, result: &ExamResult) -> Result<(), ApiError>;
    async fn delete_exam_result(&self, student: &StudentNumber, id: &RecordId)
        -> Result<(), ApiError>;

    // Admin: narrated sounds
    async fn upload_sound(&self, sound: &NewSoundAsset) -> Result<SoundAsset, ApiError>;
    async fn list_sounds(&self) -> Result<Vec<SoundAsset>, ApiError>;
    async fn delete_sound(&self, id: &RecordId) -> Result<(), ApiError>;

    // Admin: labeled audio files
    async fn upload_audio_file(&self, file: &NewAudioFile) -> Result<AudioFile, ApiError>;
    async fn list_audio_files(&self) -> Result<Vec<AudioFile>, ApiError>;
    async fn delete_audio_file(&self, id: &RecordId) -> Result<(), ApiError>;
}
