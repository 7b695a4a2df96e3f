//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: the stored payload plus expiration metadata.
///
/// The payload is opaque to the cache; it is never mutated, only returned
/// by reference or dropped with the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic timestamp recorded at insertion
    pub stored_at: Instant,
    /// Duration after which the entry is considered stale
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with the given TTL, stamped now.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL.
    ///
    /// Boundary condition: an entry is live while `now - stored_at <= ttl`
    /// and expired strictly after the TTL has fully elapsed. Reading an
    /// entry never refreshes `stored_at` (no sliding expiration).
    pub fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }

    // == TTL Remaining ==
    /// Returns the time left before the entry expires.
    ///
    /// Returns `Duration::ZERO` once the TTL has elapsed. Useful for
    /// debugging and statistics.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.stored_at.elapsed())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(60));

        assert_eq!(entry.value, "test_value");
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("test_value", Duration::from_millis(20));

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(50));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new("test_value", Duration::ZERO);

        sleep(Duration::from_millis(5));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("test_value", Duration::from_secs(10));

        let remaining = entry.ttl_remaining();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining >= Duration::from_secs(9));
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("test_value", Duration::from_millis(10));

        sleep(Duration::from_millis(30));

        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // Backdate the entry so that exactly its TTL (and a hair more) has
        // elapsed; the liveness check is inclusive on the live side.
        let ttl = Duration::from_secs(1);
        let live = CacheEntry {
            value: "test",
            stored_at: Instant::now(),
            ttl,
        };
        assert!(!live.is_expired(), "Entry within TTL should be live");

        let backdated = Instant::now() - (ttl + Duration::from_millis(10));
        let stale = CacheEntry {
            value: "test",
            stored_at: backdated,
            ttl,
        };
        assert!(stale.is_expired(), "Entry past TTL should be stale");
    }
}
