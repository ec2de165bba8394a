//! Configuration Module
//!
//! Plain configuration data for the retry engine and the TTL cache. The core
//! never reads the environment itself; callers build these structs directly or
//! deserialize them from whatever settings source the surrounding product uses.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry policy parameters.
///
/// Immutable for the lifetime of a [`RetryPolicyEngine`](crate::RetryPolicyEngine)
/// instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of re-invocations after the initial attempt
    pub max_retries: u32,
    /// Base delay in milliseconds for exponential backoff
    pub retry_delay_ms: u64,
    /// Status codes that justify retrying; codes outside this set abort immediately
    pub retryable_status_codes: HashSet<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 1000,
            retryable_status_codes: [408, 429, 500, 502, 503, 504].into_iter().collect(),
        }
    }
}

/// TTL cache parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Default time-to-live in milliseconds for entries stored without an override
    pub default_ttl_ms: u64,
    /// Interval in seconds between background purge sweeps
    pub purge_interval_secs: u64,
}

impl CacheConfig {
    /// Default TTL as a [`Duration`].
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    /// Purge sweep interval as a [`Duration`].
    pub fn purge_interval(&self) -> Duration {
        Duration::from_secs(self.purge_interval_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // 5 minutes
            default_ttl_ms: 5 * 60 * 1000,
            purge_interval_secs: 60,
        }
    }
}
