//! Background task that evicts expired sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::registry::SessionRegistry;

/// Periodic sweeper for a [`SessionRegistry`].
#[derive(Debug)]
pub struct SessionSweeper;

impl SessionSweeper {
    /// Spawns the sweep loop.
    ///
    /// The first sweep runs one `period` after start. The task exits when
    /// `shutdown` carries `true` or its sender is dropped.
    pub fn start(
        registry: Arc<SessionRegistry>,
        period: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(period_secs = period.as_secs(), "Session sweeper started");

            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        let removed = registry.sweep();
                        if removed > 0 {
                            info!(removed, remaining = registry.len(), "Expired sessions swept");
                        } else {
                            debug!(remaining = registry.len(), "Nothing to sweep");
                        }
                    }
                }
            }

            info!("Session sweeper stopped");
        })
    }
}
