//! Admin Service - passcode login scoped to the browser session

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::ports::outbound::{storage_keys, PlatformPort};

#[derive(Clone)]
pub struct AdminService {
    platform: Arc<dyn PlatformPort>,
    passcode_sha256: String,
}

impl AdminService {
    /// `passcode_sha256` is the lowercase hex digest of the admin passcode.
    pub fn new(platform: Arc<dyn PlatformPort>, passcode_sha256: impl Into<String>) -> Self {
        Self {
            platform,
            passcode_sha256: passcode_sha256.into().trim().to_ascii_lowercase(),
        }
    }

    /// Returns whether the passcode was accepted.
    pub fn login(&self, passcode: &str) -> bool {
        let digest = hex::encode(Sha256::digest(passcode.as_bytes()));
        if digest != self.passcode_sha256 {
            tracing::warn!("Rejected admin passcode");
            return false;
        }
        self.platform
            .session_save(storage_keys::ADMIN_SESSION, storage_keys::ADMIN_SESSION_ACTIVE);
        tracing::info!("Admin session started");
        true
    }

    pub fn logout(&self) {
        self.platform.session_remove(storage_keys::ADMIN_SESSION);
        tracing::info!("Admin session ended");
    }

    pub fn is_logged_in(&self) -> bool {
        self.platform.session_load(storage_keys::ADMIN_SESSION).as_deref()
            == Some(storage_keys::ADMIN_SESSION_ACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatform;

    // sha256("open-sesame")
    const DIGEST: &str = "d7ecdf25eaf3deba0f2628771dbdd22d4138ab6cf38f91ed02a2ca0dec7c8ab7";

    #[test]
    fn correct_passcode_opens_session() {
        let platform = MockPlatform::new().build();
        let admin = AdminService::new(Arc::new(platform.clone()), DIGEST);

        assert!(!admin.is_logged_in());
        assert!(admin.login("open-sesame"));
        assert!(admin.is_logged_in());
        assert_eq!(
            platform.session_load(storage_keys::ADMIN_SESSION).as_deref(),
            Some("true")
        );

        admin.logout();
        assert!(!admin.is_logged_in());
    }

    #[test]
    fn wrong_passcode_is_rejected() {
        let platform = MockPlatform::new().build();
        let admin = AdminService::new(Arc::new(platform), DIGEST);
        assert!(!admin.login("open sesame"));
        assert!(!admin.is_logged_in());
    }

    #[test]
    fn configured_digest_is_case_insensitive() {
        let platform = MockPlatform::new().build();
        let admin = AdminService::new(Arc::new(platform), DIGEST.to_ascii_uppercase());
        assert!(admin.login("open-sesame"));
    }

    #[test]
    fn session_survives_in_session_storage_only() {
        let platform = MockPlatform::new()
            .with_session(storage_keys::ADMIN_SESSION, "true")
            .build();
        let admin = AdminService::new(Arc::new(platform.clone()), DIGEST);
        assert!(admin.is_logged_in());
        assert!(platform.storage_load(storage_keys::ADMIN_SESSION).is_none());
    }
}
