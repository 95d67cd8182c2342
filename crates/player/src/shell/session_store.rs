//! Local persistence of identity and cached progress
//!
//! Reads never fail: a missing or unparseable value is treated as absent.

use mucit_domain::{ActivityId, Identity, Progress};

use crate::ports::outbound::{storage_keys, PlatformPort};

/// Restore the signed-in identity from persistent storage.
///
/// Username, avatar and student number must all be present and valid. A
/// missing user id is synthesized from the student number and written back.
pub fn load_identity(platform: &dyn PlatformPort) -> Option<Identity> {
    let username = platform.storage_load(storage_keys::USERNAME)?;
    let avatar = platform.storage_load(storage_keys::AVATAR)?;
    let student_number = platform.storage_load(storage_keys::STUDENT_NUMBER)?;
    let stored_user_id = platform.storage_load(storage_keys::USER_ID);

    match Identity::from_parts(
        stored_user_id.as_deref(),
        &username,
        &avatar,
        &student_number,
    ) {
        Ok(identity) => {
            let missing_id = stored_user_id
                .as_deref()
                .map(|id| id.trim().is_empty())
                .unwrap_or(true);
            if missing_id {
                platform.storage_save(storage_keys::USER_ID, identity.user_id.as_str());
            }
            Some(identity)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring invalid stored identity");
            None
        }
    }
}

/// Write all identity fields to persistent storage
pub fn save_identity(platform: &dyn PlatformPort, identity: &Identity) {
    platform.storage_save(storage_keys::USERNAME, identity.username.as_str());
    platform.storage_save(storage_keys::AVATAR, identity.avatar.as_str());
    platform.storage_save(storage_keys::STUDENT_NUMBER, identity.student_number.as_str());
    platform.storage_save(storage_keys::USER_ID, identity.user_id.as_str());
}

/// Remove identity and cached progress (used when a different student
/// signs in on the same device)
pub fn clear_identity(platform: &dyn PlatformPort) {
    for key in [
        storage_keys::USERNAME,
        storage_keys::AVATAR,
        storage_keys::STUDENT_NUMBER,
        storage_keys::USER_ID,
        storage_keys::SCORE,
        storage_keys::COMPLETED,
        storage_keys::PROGRESS_PERCENT,
    ] {
        platform.storage_remove(key);
    }
}

pub fn load_progress(platform: &dyn PlatformPort) -> Progress {
    let score = platform
        .storage_load(storage_keys::SCORE)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0);
    let completed = platform
        .storage_load(storage_keys::COMPLETED)
        .and_then(|v| serde_json::from_str::<Vec<ActivityId>>(&v).ok())
        .unwrap_or_default();
    let percent = platform
        .storage_load(storage_keys::PROGRESS_PERCENT)
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(0);
    Progress::new(score, completed, percent)
}

pub fn save_progress(platform: &dyn PlatformPort, progress: &Progress) {
    platform.storage_save(storage_keys::SCORE, &progress.score.to_string());
    match serde_json::to_string(&progress.completed_activities) {
        Ok(json) => platform.storage_save(storage_keys::COMPLETED, &json),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize completed activities"),
    }
    platform.storage_save(storage_keys::PROGRESS_PERCENT, &progress.percent.to_string());
}

/// Whether this browser session holds an admin login
pub fn is_admin_session(platform: &dyn PlatformPort) -> bool {
    platform
        .session_load(storage_keys::ADMIN_SESSION)
        .map(|v| v == storage_keys::ADMIN_SESSION_ACTIVE)
        .unwrap_or(false)
}
