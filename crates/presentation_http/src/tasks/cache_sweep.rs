//! Audio cache retention sweep task
//!
//! Periodically removes cached audio artifacts older than the configured
//! retention period.

use std::sync::Arc;
use std::time::Duration;

use audio_cache::AudioCacheStore;
use tracing::{debug, error, info};

/// Default sweep interval: once per hour
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Spawn a background task that periodically sweeps the audio cache.
///
/// The task runs at the given interval and removes artifacts older than
/// `retention_days`. Returns a `JoinHandle` that can be used to abort the
/// task on shutdown.
///
/// # Arguments
///
/// * `cache` - The artifact store to sweep
/// * `retention_days` - Remove artifacts older than this many days
/// * `sweep_interval` - How often to sweep (defaults to 1 hour if None)
///
/// # Example
///
/// ```ignore
/// let sweep_handle = spawn_cache_sweep_task(
///     cache,
///     7, // one week retention
///     None, // default interval
/// );
///
/// // On shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_cache_sweep_task(
    cache: Arc<AudioCacheStore>,
    retention_days: u64,
    sweep_interval: Option<Duration>,
) -> tokio::task::JoinHandle<()> {
    let interval = sweep_interval.unwrap_or(Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS));

    info!(
        retention_days = retention_days,
        interval_secs = interval.as_secs(),
        "Starting audio cache sweep task"
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Don't run immediately on startup
        ticker.tick().await;

        loop {
            ticker.tick().await;

            debug!(retention_days, "Running audio cache sweep");

            match cache.sweep(retention_days).await {
                Ok(removed) => {
                    if removed > 0 {
                        info!(
                            removed_count = removed,
                            retention_days, "Swept stale audio artifacts"
                        );
                    } else {
                        debug!("No stale audio artifacts to sweep");
                    }
                },
                Err(e) => {
                    error!(
                        error = %e,
                        "Audio cache sweep failed"
                    );
                },
            }
        }
    })
}
