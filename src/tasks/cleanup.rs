//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::SharedCache;

/// Spawns a background task that periodically sweeps expired entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between
/// sweeps and taking the cache's write lock only for the duration of each
/// sweep. The sweep re-checks liveness per entry, so an entry refreshed
/// while the task was sleeping is left alone.
///
/// The cache does not own this timer: the host spawns the task, keeps the
/// returned [`JoinHandle`], and aborts it during shutdown. Correctness
/// never depends on the sweep running, since reads evict lazily; the sweep
/// only bounds memory when reads are infrequent.
///
/// # Example
/// ```ignore
/// let cache: SharedCache<String> = Arc::new(RwLock::new(TtlCache::new(ttl)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval());
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: SharedCache<V>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.clean_expired()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}
