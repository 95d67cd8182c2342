//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use chrono::NaiveDate;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use super::MemoryStorageProvider;
use crate::config::AppConfig;
use crate::ports::outbound::{
    BackgroundTask, DocumentProvider, LocationProvider, RandomProvider, StorageProvider,
    TaskProvider, TimeProvider,
};
use crate::state::Platform;

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Desktop random provider using rand crate
#[derive(Clone, Default)]
pub struct DesktopRandomProvider;

impl RandomProvider for DesktopRandomProvider {
    fn random_f64(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/mucitevreni/storage.json
/// - macOS: ~/Library/Application Support/com.mucit.mucitevreni/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\mucit\mucitevreni\config\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a storage provider in the platform config directory
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("com", "mucit", "mucitevreni") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("mucit_storage.json")
        };
        Self::with_path(storage_path)
    }

    /// Create a storage provider backed by a specific file.
    ///
    /// Loads existing data from the file if it exists. A corrupt file is
    /// treated as empty.
    pub fn with_path(storage_path: PathBuf) -> Self {
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to serialize storage data: {}", e);
            }
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => {
                tracing::error!("Failed to acquire write lock for storage: {}", e);
            }
        }
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

/// Desktop task provider on the ambient tokio runtime
#[derive(Clone, Default)]
pub struct DesktopTaskProvider;

impl TaskProvider for DesktopTaskProvider {
    fn spawn(&self, task: BackgroundTask) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(e) => tracing::warn!("No async runtime for background task: {}", e),
        }
    }
}

/// Desktop stand-in for `window.location`.
///
/// There is no address bar, so the fragment is held in memory and seeded
/// from `MUCIT_START_FRAGMENT`.
#[derive(Clone, Default)]
pub struct DesktopLocationProvider {
    fragment: Arc<RwLock<Option<String>>>,
}

impl DesktopLocationProvider {
    pub fn new(start_fragment: Option<String>) -> Self {
        Self {
            fragment: Arc::new(RwLock::new(start_fragment)),
        }
    }
}

impl LocationProvider for DesktopLocationProvider {
    fn fragment(&self) -> Option<String> {
        self.fragment
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|f| !f.is_empty())
    }

    fn path(&self) -> String {
        "/".to_string()
    }

    fn set_fragment(&self, fragment: &str) {
        match self.fragment.write() {
            Ok(mut guard) => *guard = Some(fragment.trim_start_matches('#').to_string()),
            Err(e) => tracing::error!("Failed to acquire write lock for location: {}", e),
        }
    }
}

/// Create platform services for desktop
pub fn create_platform(config: &AppConfig) -> Platform {
    Platform::new(
        DesktopTimeProvider,
        DesktopTaskProvider,
        DesktopRandomProvider,
        DesktopStorageProvider::new(),
        MemoryStorageProvider::new(),
        DesktopDocumentProvider,
        DesktopLocationProvider::new(config.start_fragment.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::with_path(path.clone());
        storage.save("mucit_username", "Ada");
        storage.save("mucit_score", "120");
        storage.remove("mucit_score");

        let reopened = DesktopStorageProvider::with_path(path);
        assert_eq!(reopened.load("mucit_username").as_deref(), Some("Ada"));
        assert_eq!(reopened.load("mucit_score"), None);
    }

    #[test]
    fn corrupt_storage_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let storage = DesktopStorageProvider::with_path(path);
        assert_eq!(storage.load("anything"), None);
    }

    #[test]
    fn location_strips_hash_and_treats_empty_as_none() {
        let location = DesktopLocationProvider::new(None);
        assert_eq!(location.fragment(), None);
        location.set_fragment("#admin");
        assert_eq!(location.fragment().as_deref(), Some("admin"));
        location.set_fragment("");
        assert_eq!(location.fragment(), None);
    }

    #[test]
    fn random_range_handles_degenerate_bounds() {
        let random = DesktopRandomProvider;
        assert_eq!(random.random_range(5, 5), 5);
        let value = random.random_range(1, 3);
        assert!((1..=3).contains(&value));
    }
}
