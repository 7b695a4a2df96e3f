//! api_cache - A lightweight in-memory TTL cache
//!
//! Memoizes arbitrary key/value pairs for a bounded time window: entries
//! are stored with a per-entry TTL, checked for liveness on every read,
//! evicted lazily when a read finds them stale, and optionally swept in
//! bulk by a host-scheduled background task. A companion utility derives
//! deterministic cache keys from request parameters.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{generate_key, CacheEntry, CacheStats, TtlCache};
pub use config::CacheConfig;
pub use error::KeyError;
pub use tasks::spawn_cleanup_task;

use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe handle to a cache, shared between its owner and the sweep
/// task. Construct the cache explicitly at startup and pass this handle to
/// whichever modules need it; there is no implicit global instance.
pub type SharedCache<V> = Arc<RwLock<TtlCache<V>>>;
