//! Resilient API transport with exponential backoff retry
//!
//! Wraps any `RawApiPort` so that transient failures (offline, timeouts,
//! throttling, server errors) are retried before surfacing to services.

use rand::Rng;
use serde_json::Value;
use std::sync::Arc;

use crate::ports::outbound::{ApiError, RawApiPort};

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of retry attempts. `None` keeps retrying until the
    /// request succeeds or fails with a non-transient error.
    pub max_retries: Option<u32>,
    /// Base delay in milliseconds before first retry
    pub base_delay_ms: u64,
    /// Maximum delay in milliseconds (caps exponential growth)
    pub max_delay_ms: u64,
    /// Jitter factor (0.0-1.0) for randomizing delays
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: None,
            base_delay_ms: 500,
            max_delay_ms: 30000,
            jitter_factor: 0.2,
        }
    }
}

/// Wrapper that adds retry logic to any JSON transport
pub struct ResilientApi {
    inner: Arc<dyn RawApiPort>,
    config: RetryConfig,
}

impl ResilientApi {
    pub fn new(inner: Arc<dyn RawApiPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Delay before retry number `attempt` (1-based): base * 2^(attempt-1),
    /// capped, then spread by ±jitter.
    fn calculate_delay(&self, attempt: u32) -> u64 {
        let base = self.config.base_delay_ms;
        let exponential = base.saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.config.max_delay_ms);

        let jitter_range = (capped as f64 * self.config.jitter_factor) as i64;
        if jitter_range > 0 {
            let jitter = rand::thread_rng().gen_range(-jitter_range..=jitter_range);
            (capped as i64 + jitter).max(0) as u64
        } else {
            capped
        }
    }

    fn retries_left(&self, attempt: u32) -> bool {
        match self.config.max_retries {
            Some(max) => attempt < max,
            None => true,
        }
    }

    async fn execute_with_retry<T, F, Fut>(
        &self,
        operation_name: &str,
        path: &str,
        operation: F,
    ) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, ApiError>>,
    {
        let mut attempt: u32 = 0;

        loop {
            match operation().await {
                Ok(response) => {
                    if attempt > 0 {
                        tracing::info!(
                            attempt = attempt + 1,
                            operation = operation_name,
                            path,
                            "API request succeeded after retry"
                        );
                    }
                    return Ok(response);
                }
                Err(e) if !e.is_transient() => {
                    tracing::debug!(
                        error = %e,
                        operation = operation_name,
                        path,
                        "API request failed with non-retryable error"
                    );
                    return Err(e);
                }
                Err(e) if !self.retries_left(attempt) => {
                    tracing::error!(
                        attempts = attempt + 1,
                        error = %e,
                        operation = operation_name,
                        path,
                        "API request failed after all retry attempts"
                    );
                    return Err(e);
                }
                Err(e) => {
                    attempt = attempt.saturating_add(1);
                    let delay = self.calculate_delay(attempt);
                    tracing::warn!(
                        attempt,
                        max_retries = ?self.config.max_retries,
                        delay_ms = delay,
                        error = %e,
                        operation = operation_name,
                        path,
                        "API request failed, retrying..."
                    );
                    backoff_sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn backoff_sleep(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
async fn backoff_sleep(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)).await;
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for ResilientApi {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let inner = Arc::clone(&self.inner);
        self.execute_with_retry("get_json", path, || {
            let inner = Arc::clone(&inner);
            async move { inner.get_json(path).await }
        })
        .await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        let inner = Arc::clone(&self.inner);
        self.execute_with_retry("get_optional_json", path, || {
            let inner = Arc::clone(&inner);
            async move { inner.get_optional_json(path).await }
        })
        .await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let inner = Arc::clone(&self.inner);
        self.execute_with_retry("post_json", path, || {
            let inner = Arc::clone(&inner);
            async move { inner.post_json(path, body).await }
        })
        .await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let inner = Arc::clone(&self.inner);
        self.execute_with_retry("put_json", path, || {
            let inner = Arc::clone(&inner);
            async move { inner.put_json(path, body).await }
        })
        .await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let inner = Arc::clone(&self.inner);
        self.execute_with_retry("delete", path, || {
            let inner = Arc::clone(&inner);
            async move { inner.delete(path).await }
        })
        .await
    }
}
