//! Typed remote data client.
//!
//! `RemoteDataClient` wraps an `Arc<dyn RawApiPort>` and implements
//! `RemoteDataPort` via serde_json conversions. Paths:
//!
//! | Record        | Path                                           |
//! |---------------|------------------------------------------------|
//! | profile       | `/api/students/{sn}/profile`                   |
//! | progress      | `/api/students/{sn}/progress`                  |
//! | notes         | `/api/students/{sn}/notes[/{id}]`              |
//! | daily plans   | `/api/students/{sn}/plans[/{id}]`              |
//! | exam results  | `/api/students/{sn}/exam-results[/{id}]`       |
//! | sounds        | `/api/admin/sounds[/{id}]`                     |
//! | audio files   | `/api/admin/audio-files[/{id}]`                |

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use mucit_domain::{
    AudioFile, DailyPlan, ExamResult, NewAudioFile, NewSoundAsset, Note, Profile, Progress,
    RecordId, SoundAsset, StudentNumber,
};

use crate::ports::outbound::{ApiError, RawApiPort, RemoteDataPort};

#[derive(Clone)]
pub struct RemoteDataClient {
    raw: Arc<dyn RawApiPort>,
}

impl RemoteDataClient {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        match self.raw.get_optional_json(path).await? {
            None => Ok(Vec::new()),
            Some(value) => from_value(value),
        }
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.raw.get_optional_json(path).await? {
            None => Ok(None),
            Some(value) => from_value(value).map(Some),
        }
    }

    async fn put<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = to_value(body)?;
        self.raw.put_json(path, &body).await.map(|_| ())
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let body = to_value(body)?;
        self.raw.post_json(path, &body).await
    }
}

fn to_value<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Serialize(e.to_string()))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}

fn student_path(student: &StudentNumber, collection: &str) -> String {
    format!("/api/students/{}/{}", student.as_str(), collection)
}

fn record_path(student: &StudentNumber, collection: &str, id: &RecordId) -> String {
    format!("{}/{}", student_path(student, collection), id.as_str())
}

const SOUNDS: &str = "/api/admin/sounds";
const AUDIO_FILES: &str = "/api/admin/audio-files";

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RemoteDataPort for RemoteDataClient {
    async fn save_profile(&self, profile: &Profile) -> Result<(), ApiError> {
        let path = student_path(&profile.identity.student_number, "profile");
        self.put(&path, profile).await
    }

    async fn fetch_profile(&self, student: &StudentNumber) -> Result<Option<Profile>, ApiError> {
        self.get_optional(&student_path(student, "profile")).await
    }

    async fn save_progress(
        &self,
        student: &StudentNumber,
        progress: &Progress,
    ) -> Result<(), ApiError> {
        self.put(&student_path(student, "progress"), progress).await
    }

    async fn fetch_progress(&self, student: &StudentNumber) -> Result<Option<Progress>, ApiError> {
        self.get_optional(&student_path(student, "progress")).await
    }

    async fn list_notes(&self, student: &StudentNumber) -> Result<Vec<Note>, ApiError> {
        self.get_list(&student_path(student, "notes")).await
    }

    async fn add_note(&self, note: &Note) -> Result<(), ApiError> {
        self.post(&student_path(&note.student_number, "notes"), note)
            .await
            .map(|_| ())
    }

    async fn update_note(&self, note: &Note) -> Result<(), ApiError> {
        self.put(&record_path(&note.student_number, "notes", &note.id), note)
            .await
    }

    async fn delete_note(&self, student: &StudentNumber, id: &RecordId) -> Result<(), ApiError> {
        self.raw.delete(&record_path(student, "notes", id)).await
    }

    async fn list_plans(&self, student: &StudentNumber) -> Result<Vec<DailyPlan>, ApiError> {
        self.get_list(&student_path(student, "plans")).await
    }

    async fn add_plan(&self, plan: &DailyPlan) -> Result<(), ApiError> {
        self.post(&student_path(&plan.student_number, "plans"), plan)
            .await
            .map(|_| ())
    }

    async fn update_plan(&self, plan: &DailyPlan) -> Result<(), ApiError> {
        self.put(&record_path(&plan.student_number, "plans", &plan.id), plan)
            .await
    }

    async fn delete_plan(&self, student: &StudentNumber, id: &RecordId) -> Result<(), ApiError> {
        self.raw.delete(&record_path(student, "plans", id)).await
    }

    async fn list_exam_results(
        &self,
        student: &StudentNumber,
    ) -> Result<Vec<ExamResult>, ApiError> {
        self.get_list(&student_path(student, "exam-results")).await
    }

    async fn add_exam_result(&self, result: &ExamResult) -> Result<(), ApiError> {
        self.post(&student_path(&result.student_number, "exam-results"), result)
            .await
            .map(|_| ())
    }

    async fn update_exam_result(&self, result: &ExamResult) -> Result<(), ApiError> {
        let path = record_path(&result.student_number, "exam-results", &result.id);
        self.put(&path, result).await
    }

    async fn delete_exam_result(
        &self,
        student: &StudentNumber,
        id: &RecordId,
    ) -> Result<(), ApiError> {
        self.raw
            .delete(&record_path(student, "exam-results", id))
            .await
    }

    async fn upload_sound(&self, sound: &NewSoundAsset) -> Result<SoundAsset, ApiError> {
        from_value(self.post(SOUNDS, sound).await?)
    }

    async fn list_sounds(&self) -> Result<Vec<SoundAsset>, ApiError> {
        self.get_list(SOUNDS).await
    }

    async fn delete_sound(&self, id: &RecordId) -> Result<(), ApiError> {
        self.raw
            .delete(&format!("{}/{}", SOUNDS, id.as_str()))
            .await
    }

    async fn upload_audio_file(&self, file: &NewAudioFile) -> Result<AudioFile, ApiError> {
        from_value(self.post(AUDIO_FILES, file).await?)
    }

    async fn list_audio_files(&self) -> Result<Vec<AudioFile>, ApiError> {
        self.get_list(AUDIO_FILES).await
    }

    async fn delete_audio_file(&self, id: &RecordId) -> Result<(), ApiError> {
        self.raw
            .delete(&format!("{}/{}", AUDIO_FILES, id.as_str()))
            .await
    }
}
