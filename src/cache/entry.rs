//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached key-value pair with its expiration deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The key this entry is indexed under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Expiration deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new entry whose TTL starts counting at `now`.
    ///
    /// # Arguments
    /// * `key` - The key the entry is stored under
    /// * `value` - The value to store
    /// * `ttl` - Optional time to live, `None` never expires
    /// * `now` - The insertion instant
    pub fn new(key: K, value: V, ttl: Option<Duration>, now: Instant) -> Self {
        Self {
            key,
            value,
            expires_at: deadline(ttl, now),
        }
    }

    // == Refresh ==
    /// Replaces the value and restarts the TTL from `now`.
    pub fn refresh(&mut self, value: V, ttl: Option<Duration>, now: Instant) {
        self.value = value;
        self.expires_at = deadline(ttl, now);
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so a
    /// zero TTL produces an entry that is already expired at insertion.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

/// Computes `now + ttl`. A TTL too large to represent never expires.
fn deadline(ttl: Option<Duration>, now: Instant) -> Option<Instant> {
    ttl.and_then(|ttl| now.checked_add(ttl))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("k", "test_value", None, now);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(now + Duration::from_secs(10_000)));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("k", 1, Some(Duration::from_secs(60)), now);

        assert_eq!(entry.expires_at, Some(now + Duration::from_secs(60)));
        assert!(!entry.is_expired_at(now));
        assert!(!entry.is_expired_at(now + Duration::from_secs(59)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new("k", 1, Some(Duration::from_secs(5)), now);

        // Expired exactly at the deadline, not one tick before
        assert!(!entry.is_expired_at(now + Duration::from_millis(4_999)));
        assert!(entry.is_expired_at(now + Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let now = Instant::now();
        let entry = CacheEntry::new("k", 1, Some(Duration::ZERO), now);

        assert!(entry.is_expired_at(now));
    }

    #[test]
    fn test_overflowing_ttl_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::new("k", 1, Some(Duration::MAX), now);

        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(now + Duration::from_secs(86_400)));
    }

    #[test]
    fn test_refresh_replaces_value_and_deadline() {
        let start = Instant::now();
        let mut entry = CacheEntry::new("k", 1, Some(Duration::from_secs(1)), start);

        let later = start + Duration::from_secs(30);
        entry.refresh(2, Some(Duration::from_secs(10)), later);

        assert_eq!(entry.value, 2);
        assert_eq!(entry.expires_at, Some(later + Duration::from_secs(10)));
        assert!(!entry.is_expired_at(later + Duration::from_secs(9)));
    }

    #[test]
    fn test_refresh_can_clear_expiration() {
        let now = Instant::now();
        let mut entry = CacheEntry::new("k", 1, Some(Duration::ZERO), now);

        entry.refresh(1, None, now);
        assert!(!entry.is_expired_at(now));
    }
}
