//! Profile Service - creating, editing and recovering a child's identity
//!
//! Local state is written first and the call returns; the remote profile
//! write runs in the background and is best effort.

use std::sync::Arc;

use mucit_domain::{AvatarId, Identity, Profile, Progress, StudentNumber, Username};

use crate::application::services::{log_remote_failure, write_behind};
use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, PlatformPort, RemoteDataPort};
use crate::shell::session_store;

#[derive(Clone)]
pub struct ProfileService {
    remote: Arc<dyn RemoteDataPort>,
    platform: Arc<dyn PlatformPort>,
}

impl ProfileService {
    pub fn new(remote: Arc<dyn RemoteDataPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { remote, platform }
    }

    /// Create a brand new profile with a freshly generated student number.
    ///
    /// Whatever the device cached for a previous student is dropped. The
    /// caller signs the identity in through the shell, which persists it.
    pub fn create_profile(
        &self,
        username: &str,
        avatar: &str,
    ) -> Result<Identity, ServiceError> {
        let username = Username::new(username)?;
        let avatar = AvatarId::new(avatar)?;
        let platform = &self.platform;
        let student_number = StudentNumber::generate(platform.now_millis(), || {
            platform.random_range(0, 9) as u32
        });
        let identity = Identity::for_new_student(username, avatar, student_number);

        session_store::clear_identity(self.platform.as_ref());
        session_store::save_progress(self.platform.as_ref(), &Progress::default());

        let profile = Profile::new(identity.clone(), self.platform.now_utc());
        let remote = Arc::clone(&self.remote);
        write_behind(
            self.platform.as_ref(),
            "save_profile",
            identity.student_number.clone(),
            async move { remote.save_profile(&profile).await },
        );

        tracing::info!(student_number = %identity.student_number, "Created profile");
        Ok(identity)
    }

    /// Rename and/or change the avatar. The student number never changes.
    ///
    /// The remote record is read back in the background so its creation
    /// time survives the rewrite.
    pub fn update_profile(
        &self,
        identity: &Identity,
        username: &str,
        avatar: &str,
    ) -> Result<Identity, ServiceError> {
        let updated = identity
            .rename(Username::new(username)?)
            .change_avatar(AvatarId::new(avatar)?);
        let now = self.platform.now_utc();

        let remote = Arc::clone(&self.remote);
        let identity = updated.clone();
        write_behind(
            self.platform.as_ref(),
            "save_profile",
            updated.student_number.clone(),
            async move {
                let profile = match remote.fetch_profile(&identity.student_number).await {
                    Ok(Some(existing)) => existing.updated(identity, now),
                    Ok(None) => Profile::new(identity, now),
                    Err(e) => {
                        log_remote_failure("fetch_profile", &identity.student_number, &e);
                        Profile::new(identity, now)
                    }
                };
                remote.save_profile(&profile).await
            },
        );

        Ok(updated)
    }

    /// Recover a profile on a new device from its student number.
    ///
    /// The remote progress replaces the local cache. When the device holds a
    /// different student's identity, that identity and its cached progress
    /// are cleared first.
    pub async fn sign_in_with_student_number(&self, raw: &str) -> Result<Identity, ServiceError> {
        let student_number = StudentNumber::parse(raw)
            .map_err(|_| ServiceError::Validation("Öğrenci numarası 16 haneli olmalı.".into()))?;

        let profile = self
            .remote
            .fetch_profile(&student_number)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Student {}", student_number)))?;

        let progress = match self.remote.fetch_progress(&student_number).await {
            Ok(progress) => progress.unwrap_or_default(),
            Err(e) => {
                log_remote_failure("fetch_progress", &student_number, &e);
                Progress::default()
            }
        };
        let stored = self.platform.storage_load(storage_keys::STUDENT_NUMBER);
        if stored.is_some_and(|s| s != student_number.as_str()) {
            session_store::clear_identity(self.platform.as_ref());
        }
        session_store::save_progress(self.platform.as_ref(), &progress);

        Ok(profile.identity)
    }
}
