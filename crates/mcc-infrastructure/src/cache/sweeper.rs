//! TTL sweeper
//!
//! Reads already ignore stale entries; the sweeper only reclaims memory held
//! by keys nobody asks for anymore.

use std::sync::Arc;
use std::time::Duration;

use mcc_application::use_cases::CatalogService;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Spawn a task that sweeps expired entries every `interval`
///
/// Returns `None` when `interval` is zero. The task stops once `shutdown`
/// is cancelled.
pub fn spawn_ttl_sweeper(
    catalog: Arc<CatalogService>,
    interval: Duration,
    shutdown: CancellationToken,
) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; nothing can be stale yet.
        ticker.tick().await;

        loop {
            tokio::select! {
                () = shutdown.cancelled() => {
                    debug!("TTL sweeper stopped");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = catalog.sweep_expired().await {
                        warn!(error = %e, "TTL sweep failed");
                    }
                }
            }
        }
    }))
}
