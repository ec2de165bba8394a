//! TTL Cache Store
//!
//! Main cache engine: a key/value map with time-based expiry, lazy removal on
//! read, and a bulk purge for entries that are never read again.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, DEFAULT_TTL};
use crate::config::CacheConfig;

// == TTL Cache ==
/// Time-bounded key/value store for memoizing previously computed values.
///
/// Keys are caller-defined opaque strings (e.g. request fingerprints). Entries
/// are superseded unconditionally by later writes to the same key and removed
/// either lazily on an expired read or in bulk by [`purge_expired`].
///
/// All operations are synchronous and non-suspending; shared use goes through
/// `Arc<RwLock<TtlCache<T>>>`.
///
/// [`purge_expired`]: TtlCache::purge_expired
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// TTL applied to entries stored without an explicit override
    default_ttl: Duration,
}

impl<T> TtlCache<T> {
    // == Constructors ==
    /// Creates a cache with the standard default TTL of 5 minutes.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL)
    }

    /// Creates a cache with a custom default TTL.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_default_ttl(config.default_ttl())
    }

    // == Get ==
    /// Retrieves the value for `key` if a live entry exists.
    ///
    /// Finding an expired entry removes it as a side effect; expired entries
    /// are never returned even if not yet physically removed by a sweep.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                // Lazy cleanup on read
                self.entries.remove(key);
                debug!(key, "expired entry removed on read");
                return None;
            }
            return Some(entry.value.clone());
        }
        None
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now (default TTL when
    /// `None`). Overwrites any existing entry unconditionally.
    pub fn set(&mut self, key: String, value: T, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key, entry);
    }

    // == Delete ==
    /// Removes the entry for `key`; no-op when absent.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Purge Expired ==
    /// Removes every expired entry, whether or not it is ever read again.
    ///
    /// Returns the number of entries removed. Intended to run from a recurring
    /// sweep (see [`PurgeTask`](crate::PurgeTask)) to bound memory growth from
    /// write-only keys.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        count
    }

    // == Length ==
    /// Storage-level entry count, including expired entries not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
