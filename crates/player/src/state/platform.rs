//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in platform/desktop.rs or platform/wasm.rs,
//!   or by `MockPlatform::build()` in tests
//! - Injected into Dioxus context by `main.rs` as `Arc<dyn PlatformPort>`

use chrono::NaiveDate;
use std::sync::Arc;

use crate::ports::outbound::{
    BackgroundTask, DocumentProvider, LocationProvider, PlatformPort, RandomProvider,
    StorageProvider, TaskProvider, TimeProvider,
};

/// Unified platform services container
///
/// Provides all platform abstractions through a single injectable type.
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    tasks: Arc<dyn TaskProviderDyn>,
    random: Arc<dyn RandomProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    session: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
    location: Arc<dyn LocationProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
    fn today(&self) -> NaiveDate;
}

trait TaskProviderDyn: Send + Sync {
    fn spawn(&self, task: BackgroundTask);
}

trait RandomProviderDyn: Send + Sync {
    fn random_f64(&self) -> f64;
    fn random_range(&self, min: i32, max: i32) -> i32;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

trait LocationProviderDyn: Send + Sync {
    fn fragment(&self) -> Option<String>;
    fn path(&self) -> String;
    fn set_fragment(&self, fragment: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
    fn today(&self) -> NaiveDate {
        TimeProvider::today(self)
    }
}

impl<T: TaskProvider + Send + Sync> TaskProviderDyn for T {
    fn spawn(&self, task: BackgroundTask) {
        TaskProvider::spawn(self, task)
    }
}

impl<T: RandomProvider + Send + Sync> RandomProviderDyn for T {
    fn random_f64(&self) -> f64 {
        RandomProvider::random_f64(self)
    }
    fn random_range(&self, min: i32, max: i32) -> i32 {
        RandomProvider::random_range(self, min, max)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl<T: LocationProvider + Send + Sync> LocationProviderDyn for T {
    fn fragment(&self) -> Option<String> {
        LocationProvider::fragment(self)
    }
    fn path(&self) -> String {
        LocationProvider::path(self)
    }
    fn set_fragment(&self, fragment: &str) {
        LocationProvider::set_fragment(self, fragment)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers.
    ///
    /// `storage` survives reloads; `session` lives for the browser session only.
    pub fn new<Tm, Tk, R, S, Ss, D, Lc>(
        time: Tm,
        tasks: Tk,
        random: R,
        storage: S,
        session: Ss,
        document: D,
        location: Lc,
    ) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Tk: TaskProvider + Send + Sync,
        R: RandomProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        Ss: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
        Lc: LocationProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            tasks: Arc::new(tasks),
            random: Arc::new(random),
            storage: Arc::new(storage),
            session: Arc::new(session),
            document: Arc::new(document),
            location: Arc::new(location),
        }
    }
}

// =============================================================================
// PlatformPort implementation
// =============================================================================

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn today(&self) -> NaiveDate {
        self.time.today()
    }

    fn spawn_background(&self, task: BackgroundTask) {
        self.tasks.spawn(task)
    }

    fn random_f64(&self) -> f64 {
        self.random.random_f64()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        self.random.random_range(min, max)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key)
    }

    fn session_save(&self, key: &str, value: &str) {
        self.session.save(key, value)
    }

    fn session_load(&self, key: &str) -> Option<String> {
        self.session.load(key)
    }

    fn session_remove(&self, key: &str) {
        self.session.remove(key)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn fragment(&self) -> Option<String> {
        self.location.fragment()
    }

    fn path(&self) -> String {
        self.location.path()
    }

    fn set_fragment(&self, fragment: &str) {
        self.location.set_fragment(fragment)
    }
}
