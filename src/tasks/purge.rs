//! TTL Purge Task
//!
//! Background task that periodically removes expired cache entries, bounding
//! memory growth from write-only keys that are never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

// == Purge Task ==
/// Owns the recurring purge sweep over a shared [`TtlCache`].
///
/// The sweep is a single recurring schedule: one task, one loop, so two sweeps
/// can never run concurrently. `start` while already running is a no-op;
/// `stop` aborts the task and is also invoked on drop.
#[derive(Debug, Default)]
pub struct PurgeTask {
    handle: Option<JoinHandle<()>>,
}

impl PurgeTask {
    // == Constructor ==
    /// Creates a purge task that is not yet running.
    pub fn new() -> Self {
        Self { handle: None }
    }

    // == Start ==
    /// Spawns the recurring sweep over `cache`, firing every `interval`.
    ///
    /// The task sleeps for the interval, acquires a write lock, and removes
    /// every expired entry. No-op if the sweep is already running.
    pub fn start<T>(&mut self, cache: Arc<RwLock<TtlCache<T>>>, interval: Duration)
    where
        T: Send + Sync + 'static,
    {
        if self.handle.is_some() {
            return;
        }

        self.handle = Some(tokio::spawn(async move {
            info!(
                interval_ms = interval.as_millis() as u64,
                "starting TTL purge task"
            );

            loop {
                tokio::time::sleep(interval).await;

                let removed = {
                    let mut cache_guard = cache.write().await;
                    cache_guard.purge_expired()
                };

                if removed > 0 {
                    info!(removed, "purge sweep removed expired entries");
                } else {
                    debug!("purge sweep found no expired entries");
                }
            }
        }));
    }

    // == Stop ==
    /// Aborts the sweep if it is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    // == Is Running ==
    /// Returns true while the sweep task is alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for PurgeTask {
    fn drop(&mut self) {
        self.stop();
    }
}
