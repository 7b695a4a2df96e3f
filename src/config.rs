//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The defaults match the reference deployment: a five-minute
/// TTL with a sweep on the same cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default TTL in milliseconds for entries stored without an explicit TTL
    pub default_ttl_ms: u64,
    /// Background sweep interval in seconds
    pub cleanup_interval_secs: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("CACHE_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300_000),
            cleanup_interval_secs: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
        }
    }

    /// Default TTL as a [`Duration`].
    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    /// Sweep interval as a [`Duration`].
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: 300_000,
            cleanup_interval_secs: 300,
        }
    }
}
