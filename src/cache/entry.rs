//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cache entry: the stored value plus its absolute expiry.
///
/// Uses [`tokio::time::Instant`] so that tests can drive expiry through the
/// paused tokio clock instead of wall-clock sleeps; outside a runtime it
/// behaves like `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Expiration instant (creation time + TTL)
    pub expires_at: Instant,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration instant, so the entry
    /// becomes invisible the moment its TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL, zero if the entry has expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(60));

        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(1));

        assert!(!entry.is_expired());

        tokio::time::advance(Duration::from_millis(1100)).await;

        assert!(entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(1));

        // Advance exactly to the expiry instant
        tokio::time::advance(Duration::from_secs(1)).await;

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_remaining() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(10));

        assert_eq!(entry.ttl_remaining(), Duration::from_secs(10));

        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(entry.ttl_remaining(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(1));

        tokio::time::advance(Duration::from_secs(2)).await;

        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }
}
