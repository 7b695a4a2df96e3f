//! Error types for cache key derivation
//!
//! Cache operations themselves are total: a lookup miss is an ordinary
//! `None`/`false`, never an error, and `set`/`remove`/`clear` cannot fail.
//! The only fallible surface is deriving a cache key from caller-supplied
//! parameters.

use thiserror::Error;

// == Key Error Enum ==
/// Errors from [`generate_key`](crate::generate_key).
#[derive(Error, Debug)]
pub enum KeyError {
    /// Parameters serialized to something other than a JSON object
    #[error("Cache key params must serialize to an object, got {0}")]
    NonObjectParams(&'static str),

    /// Parameter serialization failed
    #[error("Failed to serialize cache key params: {0}")]
    Serialize(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for key derivation.
pub type Result<T> = std::result::Result<T, KeyError>;
