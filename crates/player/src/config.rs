//! Runtime configuration
//!
//! Desktop builds read environment variables (after loading `.env` with
//! `dotenvy`). Web builds have no process environment, so the same names are
//! captured at compile time.

use crate::infrastructure::resilient_api::RetryConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// SHA-256 of the development passcode `mucit-admin`
pub const DEFAULT_ADMIN_PASSCODE_SHA256: &str =
    "0ffdf6f0e4b88484d84e5f4c534e0145540b6a68af9ae91d996dea9137a45c9d";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote data store
    pub api_base_url: String,
    /// Lowercase hex SHA-256 digest of the admin passcode
    pub admin_passcode_sha256: String,
    pub retry: RetryConfig,
    /// Desktop only: fragment to start with (e.g. `admin`)
    pub start_fragment: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            admin_passcode_sha256: DEFAULT_ADMIN_PASSCODE_SHA256.to_string(),
            retry: RetryConfig::default(),
            start_fragment: None,
        }
    }
}

impl AppConfig {
    /// Load configuration for the current target.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Err(e) = dotenvy::dotenv() {
                tracing::debug!("No .env file loaded: {}", e);
            }
            Self::from_lookup(|name| std::env::var(name).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(build_time_var)
        }
    }

    /// Build configuration from a variable lookup. Unparseable numbers fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let retry = RetryConfig {
            max_retries: non_empty("MUCIT_MAX_RETRIES").and_then(|v| v.trim().parse().ok()),
            base_delay_ms: non_empty("MUCIT_RETRY_BASE_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.retry.base_delay_ms),
            max_delay_ms: non_empty("MUCIT_RETRY_MAX_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.retry.max_delay_ms),
            jitter_factor: defaults.retry.jitter_factor,
        };

        Self {
            api_base_url: non_empty("MUCIT_API_URL")
                .and_then(|v| parse_base_url(&v))
                .unwrap_or(defaults.api_base_url),
            admin_passcode_sha256: non_empty("MUCIT_ADMIN_PASSCODE_SHA256")
                .map(|v| v.trim().to_ascii_lowercase())
                .unwrap_or(defaults.admin_passcode_sha256),
            retry,
            start_fragment: non_empty("MUCIT_START_FRAGMENT"),
        }
    }
}

/// Accept only absolute http(s) URLs; the trailing `/` is dropped.
fn parse_base_url(raw: &str) -> Option<String> {
    match url::Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Some(url.as_str().trim_end_matches('/').to_string())
        }
        Ok(url) => {
            tracing::warn!(scheme = url.scheme(), "MUCIT_API_URL must be http or https, using default");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid MUCIT_API_URL, using default");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn build_time_var(name: &str) -> Option<String> {
    let value = match name {
        "MUCIT_API_URL" => option_env!("MUCIT_API_URL"),
        "MUCIT_ADMIN_PASSCODE_SHA256" => option_env!("MUCIT_ADMIN_PASSCODE_SHA256"),
        "MUCIT_MAX_RETRIES" => option_env!("MUCIT_MAX_RETRIES"),
        "MUCIT_RETRY_BASE_MS" => option_env!("MUCIT_RETRY_BASE_MS"),
        "MUCIT_RETRY_MAX_MS" => option_env!("MUCIT_RETRY_MAX_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.retry.max_retries, None);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MUCIT_API_URL", "https://veri.example.org/"),
            ("MUCIT_ADMIN_PASSCODE_SHA256", "ABCDEF"),
            ("MUCIT_MAX_RETRIES", "4"),
            ("MUCIT_RETRY_BASE_MS", "250"),
            ("MUCIT_START_FRAGMENT", "admin"),
        ]));
        assert_eq!(config.api_base_url, "https://veri.example.org");
        assert_eq!(config.admin_passcode_sha256, "abcdef");
        assert_eq!(config.retry.max_retries, Some(4));
        assert_eq!(config.retry.base_delay_ms, 250);
        assert_eq!(config.start_fragment.as_deref(), Some("admin"));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MUCIT_MAX_RETRIES", "many"),
            ("MUCIT_RETRY_MAX_MS", ""),
        ]));
        assert_eq!(config.retry.max_retries, None);
        assert_eq!(config.retry.max_delay_ms, RetryConfig::default().max_delay_ms);
    }

    #[test]
    fn invalid_api_url_falls_back() {
        let relative = AppConfig::from_lookup(lookup(&[("MUCIT_API_URL", "veri/api")]));
        assert_eq!(relative.api_base_url, DEFAULT_API_URL);

        let ftp = AppConfig::from_lookup(lookup(&[("MUCIT_API_URL", "ftp://veri.example.org")]));
        assert_eq!(ftp.api_base_url, DEFAULT_API_URL);
    }
}
