//! Raw API Port - Object-safe HTTP boundary
//!
//! `RawApiPort` is the JSON transport implemented by adapters (reqwest on
//! desktop, gloo-net on the web). The application layer builds the typed
//! remote data client on top of it.

use serde_json::Value;
use thiserror::Error;

/// Transport-level failure
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Request never got a response (DNS, connection refused, offline)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { code: 404, .. })
    }

    /// Whether repeating the same request may succeed.
    ///
    /// Network failures, timeouts, throttling and server errors are transient;
    /// client errors and decoding problems are not.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { code, .. } => *code == 408 || *code == 429 || *code >= 500,
            ApiError::Parse(_) | ApiError::Serialize(_) => false,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// GET that maps 404 to `None`
    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ApiError::Network("offline".into()).is_transient());
        assert!(ApiError::Status { code: 503, body: String::new() }.is_transient());
        assert!(ApiError::Status { code: 429, body: String::new() }.is_transient());
        assert!(!ApiError::Status { code: 400, body: String::new() }.is_transient());
        assert!(!ApiError::Parse("bad".into()).is_transient());
    }
}
