//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::config::CacheConfig;

// == TTL Cache ==
/// In-memory key/value store with per-entry expiration.
///
/// Stale entries are removed lazily when a read discovers them, or in bulk
/// by [`clean_expired`](Self::clean_expired). The store itself holds no lock
/// and no timer: multi-threaded hosts wrap it in a [`SharedCache`] and drive
/// the sweep from their own scheduler (see [`crate::tasks`]).
///
/// [`SharedCache`]: crate::SharedCache
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied when a caller does not specify one
    default_ttl: Duration,
}

impl<V> TtlCache<V> {
    // == Constructors ==
    /// Creates a new cache with the given default TTL.
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    /// Creates a new cache configured from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl())
    }

    /// Returns the TTL applied to entries stored without an explicit one.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// Always succeeds. If the key already exists the prior entry is fully
    /// replaced: value, insertion timestamp, and TTL. Liveness of the new
    /// entry is governed solely by the TTL passed here (or the default).
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves the value for `key` if a live entry exists.
    ///
    /// A found-but-stale entry is removed as a side effect (lazy eviction)
    /// and reported as a miss. Reading never extends an entry's life.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Contains ==
    /// Checks whether a live entry exists for `key`.
    ///
    /// Performs the same liveness check and lazy eviction as [`get`](Self::get)
    /// without returning the value. Does not move the hit/miss counters.
    pub fn contains(&mut self, key: &str) -> bool {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return false,
        };

        if expired {
            self.entries.remove(key);
            self.stats.record_expirations(1);
            return false;
        }

        true
    }

    // == Remove ==
    /// Removes the entry for `key` unconditionally, live or stale.
    ///
    /// Returns whether something was removed. A missing key is not an
    /// error, just `false`.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries. Idempotent.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Clean Expired ==
    /// Removes every entry that is stale at the time of the scan.
    ///
    /// Each entry's liveness is evaluated at the moment of its removal
    /// decision, so an entry re-`set` since the sweep was scheduled keeps
    /// its fresh timestamp and survives. Returns the number removed.
    ///
    /// Intended to be invoked on a fixed interval by an externally owned
    /// scheduler (see [`crate::tasks::spawn_cleanup_task`]) to bound memory
    /// when reads are too infrequent to trigger lazy eviction.
    pub fn clean_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Length ==
    /// Returns the current number of entries, *including* stale ones that
    /// no read or sweep has removed yet. Callers needing only the live
    /// count should call [`clean_expired`](Self::clean_expired) first.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
