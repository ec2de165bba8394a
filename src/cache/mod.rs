//! Cache Module
//!
//! Provides in-memory caching of previously computed values with TTL expiration.

mod entry;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use store::TtlCache;

use std::time::Duration;

// == Public Constants ==
/// Default time-to-live for entries stored without an explicit TTL
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
