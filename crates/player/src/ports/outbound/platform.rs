//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Application/presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`. Ports layer contains only trait definitions.

use chrono::NaiveDate;
use std::{future::Future, pin::Pin};

/// Time operations abstraction
pub trait TimeProvider: Clone + 'static {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Today's calendar date in the user's local time zone
    fn today(&self) -> NaiveDate;
}

/// Fire-and-forget work handed to the platform executor
#[cfg(not(target_arch = "wasm32"))]
pub type BackgroundTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Fire-and-forget work handed to the platform executor
#[cfg(target_arch = "wasm32")]
pub type BackgroundTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// `Send` on native targets, no bound on wasm where futures stay on one thread
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

/// `Send` on native targets, no bound on wasm where futures stay on one thread
#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

/// Detached task execution.
///
/// The caller never awaits the task; it runs to completion on its own.
pub trait TaskProvider: Clone + 'static {
    fn spawn(&self, task: BackgroundTask);
}

/// Random number generation abstraction
pub trait RandomProvider: Clone + 'static {
    /// Generate random f64 in range [0.0, 1.0)
    fn random_f64(&self) -> f64;

    /// Generate random i32 in range [min, max] (inclusive)
    fn random_range(&self, min: i32, max: i32) -> i32;
}

/// Key-value storage abstraction.
///
/// Used twice: once for persistent storage (localStorage / file) and once
/// for session-scoped storage (sessionStorage / memory).
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// URL location access.
///
/// On the web this is `window.location`; on desktop an in-memory stand-in.
pub trait LocationProvider: Clone + 'static {
    /// Current URL fragment without the leading `#`, `None` when empty
    fn fragment(&self) -> Option<String>;

    /// Current URL path (`/` when unknown)
    fn path(&self) -> String;

    /// Replace the URL fragment. An empty string clears it.
    fn set_fragment(&self, fragment: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    use chrono::NaiveDate;

    // Identity (persistent)
    pub const USERNAME: &str = "mucit_username";
    pub const AVATAR: &str = "mucit_avatar";
    pub const STUDENT_NUMBER: &str = "mucit_student_number";
    pub const USER_ID: &str = "mucit_user_id";

    // Cached progress for instant header rendering (persistent)
    pub const SCORE: &str = "mucit_score";
    pub const COMPLETED: &str = "mucit_completed";
    pub const PROGRESS_PERCENT: &str = "mucit_progress_percent";

    // Session-scoped
    pub const ADMIN_SESSION: &str = "mucit_admin_session";

    /// Value stored under `ADMIN_SESSION` once the admin has logged in
    pub const ADMIN_SESSION_ACTIVE: &str = "true";

    /// Per-activity visit counter
    pub fn visits(activity: &str) -> String {
        format!("mucit_visits_{}", activity)
    }

    /// Marker that the daily exam was taken on `date`
    pub fn exam_taken(user_id: &str, age_group: &str, date: NaiveDate) -> String {
        format!("mucit_exam_{}_{}_{}", user_id, age_group, date.format("%Y-%m-%d"))
    }

    /// Cached note list for a student
    pub fn notes(student_number: &str) -> String {
        format!("mucit_notes_{}", student_number)
    }

    /// Cached plan list for a student
    pub fn plans(student_number: &str) -> String {
        format!("mucit_plans_{}", student_number)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn exam_key_includes_user_group_and_date() {
            let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
            assert_eq!(
                exam_taken("user_1", "6-8", date),
                "mucit_exam_user_1_6-8_2026-03-07"
            );
        }
    }
}
