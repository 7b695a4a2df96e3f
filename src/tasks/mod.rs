//! Background Tasks Module
//!
//! Contains background tasks a host application can run alongside a cache.
//!
//! # Tasks
//! - TTL Cleanup: sweeps expired cache entries at a configured interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
