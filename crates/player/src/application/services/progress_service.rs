//! Progress Service - score, completed activities and visit counters

use std::sync::Arc;

use mucit_domain::{ActivityId, ActivityResult, Identity, Progress};

use crate::application::services::catalog::catalog_size;
use crate::application::services::{log_remote_failure, write_behind};
use crate::ports::outbound::{storage_keys, PlatformPort, RemoteDataPort};
use crate::shell::session_store;

#[derive(Clone)]
pub struct ProgressService {
    remote: Arc<dyn RemoteDataPort>,
    platform: Arc<dyn PlatformPort>,
}

impl ProgressService {
    pub fn new(remote: Arc<dyn RemoteDataPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { remote, platform }
    }

    /// Progress as last cached on this device
    pub fn cached(&self) -> Progress {
        session_store::load_progress(self.platform.as_ref())
    }

    /// Fold a finished activity into progress and persist it.
    pub fn record_result(&self, identity: &Identity, result: &ActivityResult) -> Progress {
        let mut progress = self.cached();
        progress.fold(result, catalog_size());
        tracing::debug!(
            activity = %result.activity_id,
            points = result.points,
            score = progress.score,
            "Recorded activity result"
        );
        self.persist(identity, &progress);
        progress
    }

    /// Add bonus points earned outside the catalog (daily exam).
    pub fn add_points(&self, identity: &Identity, points: u32) -> Progress {
        let mut progress = self.cached();
        progress.add_points(points);
        self.persist(identity, &progress);
        progress
    }

    /// Replace the cache with the remote copy when one exists.
    pub async fn refresh(&self, identity: &Identity) -> Progress {
        match self.remote.fetch_progress(&identity.student_number).await {
            Ok(Some(remote)) => {
                session_store::save_progress(self.platform.as_ref(), &remote);
                remote
            }
            Ok(None) => self.cached(),
            Err(e) => {
                log_remote_failure("fetch_progress", &identity.student_number, &e);
                self.cached()
            }
        }
    }

    fn persist(&self, identity: &Identity, progress: &Progress) {
        session_store::save_progress(self.platform.as_ref(), progress);

        let remote = Arc::clone(&self.remote);
        let student = identity.student_number.clone();
        let snapshot = progress.clone();
        write_behind(
            self.platform.as_ref(),
            "save_progress",
            identity.student_number.clone(),
            async move { remote.save_progress(&student, &snapshot).await },
        );
    }

    /// Count one more visit to an activity; returns the new count.
    pub fn record_visit(&self, activity: &ActivityId) -> u32 {
        let count = self.visits(activity).saturating_add(1);
        self.platform
            .storage_save(&storage_keys::visits(activity.as_str()), &count.to_string());
        count
    }

    pub fn visits(&self, activity: &ActivityId) -> u32 {
        self.platform
            .storage_load(&storage_keys::visits(activity.as_str()))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }
}
