//! Sound Library Service - admin management of narrated sounds and audio files
//!
//! Every operation requires an active admin session. Remote failures are
//! returned to the caller rather than swallowed.

use std::sync::Arc;

use mucit_domain::{AudioFile, NewAudioFile, NewSoundAsset, RecordId, SoundAsset};

use crate::application::services::AdminService;
use crate::application::ServiceError;
use crate::ports::outbound::RemoteDataPort;

#[derive(Clone)]
pub struct SoundLibraryService {
    remote: Arc<dyn RemoteDataPort>,
    admin: AdminService,
}

impl SoundLibraryService {
    pub fn new(remote: Arc<dyn RemoteDataPort>, admin: AdminService) -> Self {
        Self { remote, admin }
    }

    fn require_admin(&self) -> Result<(), ServiceError> {
        if self.admin.is_logged_in() {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }

    pub async fn upload_sound(
        &self,
        label: &str,
        category: &str,
        data_url: &str,
    ) -> Result<SoundAsset, ServiceError> {
        self.require_admin()?;
        let sound = NewSoundAsset::new(label, category, data_url)?;
        let stored = self.remote.upload_sound(&sound).await?;
        tracing::info!(sound_id = %stored.id, category = %stored.category, "Uploaded sound");
        Ok(stored)
    }

    pub async fn list_sounds(&self) -> Result<Vec<SoundAsset>, ServiceError> {
        self.require_admin()?;
        let mut sounds = self.remote.list_sounds().await?;
        sounds.sort_by(|a, b| a.category.cmp(&b.category).then(a.label.cmp(&b.label)));
        Ok(sounds)
    }

    pub async fn delete_sound(&self, id: &RecordId) -> Result<(), ServiceError> {
        self.require_admin()?;
        self.remote.delete_sound(id).await?;
        tracing::info!(sound_id = %id, "Deleted sound");
        Ok(())
    }

    pub async fn upload_audio_file(
        &self,
        label: &str,
        file_name: &str,
        data_url: &str,
    ) -> Result<AudioFile, ServiceError> {
        self.require_admin()?;
        let file = NewAudioFile::new(label, file_name, data_url)?;
        let stored = self.remote.upload_audio_file(&file).await?;
        tracing::info!(audio_id = %stored.id, file_name = %stored.file_name, "Uploaded audio file");
        Ok(stored)
    }

    pub async fn list_audio_files(&self) -> Result<Vec<AudioFile>, ServiceError> {
        self.require_admin()?;
        let mut files = self.remote.list_audio_files().await?;
        files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(files)
    }

    pub async fn delete_audio_file(&self, id: &RecordId) -> Result<(), ServiceError> {
        self.require_admin()?;
        self.remote.delete_audio_file(id).await?;
        tracing::info!(audio_id = %id, "Deleted audio file");
        Ok(())
    }
}
