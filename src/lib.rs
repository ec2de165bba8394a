//! Dev Forge resilience core
//!
//! Provides the retry-with-backoff policy engine and the TTL response cache
//! used by the request execution layer. The two components are independent:
//! typical callers check the cache first, run the real operation through the
//! retry engine on a miss, and store the result back in the cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod retry;
pub mod tasks;

pub use cache::TtlCache;
pub use config::{CacheConfig, RetryConfig};
pub use error::RetryError;
pub use retry::RetryPolicyEngine;
pub use tasks::PurgeTask;
