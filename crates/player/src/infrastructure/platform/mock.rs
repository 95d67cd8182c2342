//! Deterministic platform for tests
//!
//! `MockPlatform` builds a real `Platform` out of in-memory providers with a
//! fixed clock and a seeded RNG. Background tasks are queued instead of
//! spawned; tests drain them with [`QueuedTasks::run_all`].

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, RwLock};

use super::MemoryStorageProvider;
use crate::ports::outbound::{
    BackgroundTask, DocumentProvider, LocationProvider, RandomProvider, StorageProvider,
    TaskProvider, TimeProvider,
};
use crate::state::Platform;

/// 2026-03-07T12:00:00Z
pub const DEFAULT_MILLIS: u64 = 1_772_884_800_000;

#[derive(Clone)]
struct FixedTime {
    millis: u64,
    today: NaiveDate,
}

impl TimeProvider for FixedTime {
    fn now_millis(&self) -> u64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Background tasks held until a test runs them
#[derive(Clone, Default)]
pub struct QueuedTasks {
    queue: Arc<Mutex<Vec<BackgroundTask>>>,
}

impl QueuedTasks {
    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    /// Run queued tasks, including any they queue, until none remain
    pub async fn run_all(&self) {
        loop {
            let batch: Vec<BackgroundTask> = match self.queue.lock() {
                Ok(mut q) => q.drain(..).collect(),
                Err(_) => return,
            };
            if batch.is_empty() {
                return;
            }
            for task in batch {
                task.await;
            }
        }
    }
}

impl TaskProvider for QueuedTasks {
    fn spawn(&self, task: BackgroundTask) {
        if let Ok(mut q) = self.queue.lock() {
            q.push(task);
        }
    }
}

#[derive(Clone)]
struct SeededRandom {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomProvider for SeededRandom {
    fn random_f64(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen(),
            Err(_) => 0.0,
        }
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(min..=max),
            Err(_) => min,
        }
    }
}

/// Records the last page title
#[derive(Clone, Default)]
struct RecordingDocument {
    title: Arc<RwLock<Option<String>>>,
}

impl DocumentProvider for RecordingDocument {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut guard) = self.title.write() {
            *guard = Some(title.to_string());
        }
    }
}

#[derive(Clone)]
struct MockLocation {
    fragment: Arc<RwLock<Option<String>>>,
    path: String,
}

impl LocationProvider for MockLocation {
    fn fragment(&self) -> Option<String> {
        self.fragment
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|f| !f.is_empty())
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        if let Ok(mut guard) = self.fragment.write() {
            *guard = Some(fragment.trim_start_matches('#').to_string());
        }
    }
}

/// Builder for a test `Platform`
pub struct MockPlatform {
    millis: u64,
    today: Option<NaiveDate>,
    seed: u64,
    storage: MemoryStorageProvider,
    session: MemoryStorageProvider,
    tasks: QueuedTasks,
    fragment: Option<String>,
    path: String,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            millis: DEFAULT_MILLIS,
            today: None,
            seed: 7,
            storage: MemoryStorageProvider::new(),
            session: MemoryStorageProvider::new(),
            tasks: QueuedTasks::default(),
            fragment: None,
            path: "/".to_string(),
        }
    }

    pub fn with_millis(mut self, millis: u64) -> Self {
        self.millis = millis;
        self
    }

    /// Override the calendar date (defaults to the UTC date of the clock)
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage.save(key, value);
        self
    }

    pub fn with_session(self, key: &str, value: &str) -> Self {
        self.session.save(key, value);
        self
    }

    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.trim_start_matches('#').to_string());
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Handle to the queue the built platform spawns into
    pub fn tasks(&self) -> QueuedTasks {
        self.tasks.clone()
    }

    /// Build, also returning the background task queue
    pub fn build_with_tasks(self) -> (Platform, QueuedTasks) {
        let tasks = self.tasks();
        (self.build(), tasks)
    }

    pub fn build(self) -> Platform {
        let today = self.today.unwrap_or_else(|| {
            let millis = i64::try_from(self.millis).unwrap_or(i64::MAX);
            chrono::DateTime::from_timestamp_millis(millis)
                .map(|dt| dt.date_naive())
                .unwrap_or_default()
        });

        Platform::new(
            FixedTime {
                millis: self.millis,
                today,
            },
            self.tasks,
            SeededRandom {
                rng: Arc::new(Mutex::new(StdRng::seed_from_u64(self.seed))),
            },
            self.storage,
            self.session,
            RecordingDocument::default(),
            MockLocation {
                fragment: Arc::new(RwLock::new(self.fragment)),
                path: self.path,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn clock_and_date_are_fixed() {
        let platform = MockPlatform::new().build();
        assert_eq!(platform.now_millis(), DEFAULT_MILLIS);
        assert_eq!(platform.today(), NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = MockPlatform::new().with_seed(42).build();
        let b = MockPlatform::new().with_seed(42).build();
        let first: Vec<i32> = (0..5).map(|_| a.random_range(0, 100)).collect();
        let second: Vec<i32> = (0..5).map(|_| b.random_range(0, 100)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn storage_areas_are_separate() {
        let platform = MockPlatform::new()
            .with_stored("k", "persistent")
            .with_session("k", "session")
            .build();
        assert_eq!(platform.storage_load("k").as_deref(), Some("persistent"));
        assert_eq!(platform.session_load("k").as_deref(), Some("session"));
    }

    #[tokio::test]
    async fn background_tasks_wait_until_drained() {
        let (platform, tasks) = MockPlatform::new().build_with_tasks();
        let inner = platform.clone();
        platform.spawn_background(Box::pin(async move {
            inner.storage_save("first", "1");
            let nested = inner.clone();
            inner.spawn_background(Box::pin(async move {
                nested.storage_save("second", "2");
            }));
        }));

        assert_eq!(tasks.pending(), 1);
        assert_eq!(platform.storage_load("first"), None);

        tasks.run_all().await;
        assert_eq!(tasks.pending(), 0);
        assert_eq!(platform.storage_load("first").as_deref(), Some("1"));
        assert_eq!(platform.storage_load("second").as_deref(), Some("2"));
    }

    #[test]
    fn fragment_can_change_after_build() {
        let platform = MockPlatform::new().with_fragment("#admin").build();
        assert_eq!(platform.fragment().as_deref(), Some("admin"));
        platform.set_fragment("");
        assert_eq!(platform.fragment(), None);
    }
}
