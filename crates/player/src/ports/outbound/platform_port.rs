//! PlatformPort - Unified platform services interface
//!
//! This trait provides a unified interface for all platform-specific operations
//! needed by the shell, the application services and the UI layer.
//!
//! The concrete implementation (`Platform`) lives in `state/platform.rs`.

use chrono::{DateTime, NaiveDate, Utc};

use super::BackgroundTask;

/// Unified platform services port
///
/// This trait provides all platform abstractions through a single injectable type.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Time operations
    // -------------------------------------------------------------------------

    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Today's calendar date in the user's local time zone
    fn today(&self) -> NaiveDate;

    /// Current instant as a UTC timestamp
    fn now_utc(&self) -> DateTime<Utc> {
        let millis = i64::try_from(self.now_millis()).unwrap_or(i64::MAX);
        DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Background tasks
    // -------------------------------------------------------------------------

    /// Run `task` detached from the caller
    fn spawn_background(&self, task: BackgroundTask);

    // -------------------------------------------------------------------------
    // Random operations
    // -------------------------------------------------------------------------

    /// Generate random f64 in range [0.0, 1.0)
    fn random_f64(&self) -> f64;

    /// Generate random i32 in range [min, max] (inclusive)
    fn random_range(&self, min: i32, max: i32) -> i32;

    // -------------------------------------------------------------------------
    // Persistent storage operations
    // -------------------------------------------------------------------------

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Session storage operations
    // -------------------------------------------------------------------------

    /// Save a value that lives only as long as the browser session
    fn session_save(&self, key: &str, value: &str);

    /// Load a session-scoped value
    fn session_load(&self, key: &str) -> Option<String>;

    /// Remove a session-scoped value
    fn session_remove(&self, key: &str);

    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    // -------------------------------------------------------------------------
    // Location operations
    // -------------------------------------------------------------------------

    /// Current URL fragment without `#`
    fn fragment(&self) -> Option<String>;

    /// Current URL path
    fn path(&self) -> String;

    /// Replace the URL fragment
    fn set_fragment(&self, fragment: &str);
}
