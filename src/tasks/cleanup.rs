//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from every region.
//! Reads already treat expired entries as absent; this only reclaims memory.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheRegistry;

/// Spawns a background task that periodically purges expired cache entries.
///
/// Each region lock is held only while that region is purged.
///
/// # Arguments
/// * `registry` - Shared registry whose regions are purged
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let registry = Arc::new(CarRegistry::from_configs(&default_regions())?);
/// let cleanup_handle = spawn_cleanup_task(registry.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V>(
    registry: Arc<CacheRegistry<K, V>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            for region in registry.regions() {
                let removed = region.purge_expired();
                if removed > 0 {
                    let stats = region.stats();
                    info!(
                        "TTL cleanup: removed {} expired entries from '{}' (entries={}, hit_rate={:.2})",
                        removed,
                        region.name(),
                        stats.total_entries,
                        stats.hit_rate()
                    );
                } else {
                    debug!("TTL cleanup: no expired entries in '{}'", region.name());
                }
            }
        }
    })
}
