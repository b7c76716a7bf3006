//! Expiry Sweep Task
//!
//! Expired entries are never served, but they stay in the store until a
//! successful fetch overwrites them. This task reclaims the rest.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task sleeps for `interval` between runs and takes the store's write
/// lock only for the duration of each purge.
///
/// # Returns
/// A JoinHandle for the spawned task; abort it when the cache is dropped or
/// the shell shuts down.
///
/// # Example
/// ```ignore
/// let cache: ReadThroughCache<serde_json::Value> = ReadThroughCache::default();
/// let sweeper = spawn_sweep_task(cache.store(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweep_task<V>(store: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "starting cache expiry sweep");

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.write().await.purge_expired();

            if removed > 0 {
                info!(removed, "expiry sweep removed entries");
            } else {
                debug!("expiry sweep found nothing to remove");
            }
        }
    })
}
