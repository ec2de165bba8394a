//! Retry Policy Engine
//!
//! Executes a caller-supplied asynchronous operation, transparently retrying
//! transient failures with exponential backoff.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::config::RetryConfig;
use crate::error::{RetryError, RetryResult};
use crate::retry::status::ErrorStatus;

// == Retry Policy Engine ==
/// Wraps asynchronous operations with a retry-on-transient-failure policy.
///
/// The configuration is fixed at construction. Concurrent `execute` calls are
/// fully independent; each carries its own attempt counter and backoff timer.
#[derive(Debug, Clone)]
pub struct RetryPolicyEngine {
    config: RetryConfig,
}

impl RetryPolicyEngine {
    // == Constructor ==
    /// Creates an engine with the given retry configuration.
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this engine was built with.
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    // == Execute ==
    /// Runs `operation`, retrying on transient failure.
    ///
    /// The operation is attempted up to `max_retries + 1` times in total. After
    /// each failure the engine extracts a status code via [`ErrorStatus`]:
    /// a code outside the retryable set aborts immediately with
    /// [`RetryError::NonRetryable`]; a retryable or absent code waits
    /// `retry_delay_ms * 2^attempt` (zero-based attempt index) and tries again.
    /// Success on any attempt returns that value at once. When the budget runs
    /// out, the last observed error is surfaced as [`RetryError::Exhausted`].
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> RetryResult<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: ErrorStatus,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    // Non-retryable status short-circuits regardless of budget
                    if let Some(status) = error.status_code() {
                        if !self.config.retryable_status_codes.contains(&status) {
                            return Err(RetryError::NonRetryable { status, error });
                        }
                    }

                    last_error = Some(error);

                    if attempt == self.config.max_retries {
                        break;
                    }

                    let delay = backoff_delay(self.config.retry_delay_ms, attempt);
                    debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "transient failure, backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }

        match last_error {
            Some(error) => Err(RetryError::Exhausted {
                attempts: self.config.max_retries + 1,
                error,
            }),
            None => Err(RetryError::NoErrorCaptured),
        }
    }
}

// == Backoff ==
/// Exponential backoff delay for a zero-based attempt index.
///
/// Saturates instead of overflowing for pathological configurations.
fn backoff_delay(base_ms: u64, attempt: u32) -> Duration {
    Duration::from_millis(base_ms.saturating_mul(2u64.saturating_pow(attempt)))
}
