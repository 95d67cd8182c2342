//! WASM platform implementations
//!
//! Browser-backed providers built on web-sys and js-sys.

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::ports::outbound::{
    BackgroundTask, DocumentProvider, LocationProvider, RandomProvider, StorageProvider,
    TaskProvider, TimeProvider,
};
use crate::state::Platform;

/// WASM time provider using js_sys::Date
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn today(&self) -> NaiveDate {
        let date = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .unwrap_or_default()
    }
}

/// WASM random provider using js_sys::Math
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_f64(&self) -> f64 {
        js_sys::Math::random()
    }

    fn random_range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let range = (max - min + 1) as f64;
        min + (js_sys::Math::random() * range).floor() as i32
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StorageArea {
    Local,
    Session,
}

/// Web Storage provider for either `localStorage` or `sessionStorage`
#[derive(Clone)]
pub struct WasmStorageProvider {
    area: StorageArea,
}

impl WasmStorageProvider {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                web_sys::console::warn_1(&format!("Failed to save storage key {}", key).into());
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// Runs background tasks on the browser microtask queue
#[derive(Clone, Default)]
pub struct WasmTaskProvider;

impl TaskProvider for WasmTaskProvider {
    fn spawn(&self, task: BackgroundTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// `window.location` access
#[derive(Clone, Default)]
pub struct WasmLocationProvider;

impl LocationProvider for WasmLocationProvider {
    fn fragment(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let trimmed = hash.trim_start_matches('#');
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn set_fragment(&self, fragment: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(fragment);
        }
    }
}

/// Create platform services for WASM
pub fn create_platform(_config: &AppConfig) -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmTaskProvider,
        WasmRandomProvider,
        WasmStorageProvider::local(),
        WasmStorageProvider::session(),
        WasmDocumentProvider,
        WasmLocationProvider,
    )
}
