//! Refresh loop
//!
//! Refreshes run one at a time. Manual requests are coalesced: any number of
//! [`RefreshHandle::request`] calls made while a refresh is running produce
//! a single follow-up refresh, and missed interval ticks are skipped rather
//! than replayed, so older data never lands after newer data.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tentacle_core::{Result, SnapshotSource};
use tentacle_state::Dashboard;
use tokio::sync::{watch, Notify};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument};

pub type SharedDashboard = Arc<RwLock<Dashboard>>;

/// Fetch without holding the lock, then apply under a short write lock.
#[instrument(skip_all, fields(source = %source.describe()))]
pub async fn refresh_once(source: &dyn SnapshotSource, dashboard: &RwLock<Dashboard>) -> Result<()> {
    let fetched = source.fetch_snapshot().await;
    let mut guard = dashboard.write();
    match fetched {
        Ok(snapshot) => guard.apply_snapshot(snapshot),
        Err(e) => {
            guard.record_failure(&e);
            Err(e)
        }
    }
}

/// Asks the poller for an out-of-band refresh.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    requests: Arc<Notify>,
}

impl RefreshHandle {
    pub fn request(&self) {
        self.requests.notify_one();
    }
}

pub struct Poller {
    source: Arc<dyn SnapshotSource>,
    dashboard: SharedDashboard,
    interval: Option<Duration>,
    requests: Arc<Notify>,
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("source", &self.source.describe())
            .field("interval", &self.interval)
            .finish()
    }
}

impl Poller {
    /// `interval` of `None` disables periodic polling; only the initial
    /// refresh and manual requests run.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        dashboard: SharedDashboard,
        interval: Option<Duration>,
    ) -> Self {
        Self {
            source,
            dashboard,
            interval,
            requests: Arc::new(Notify::new()),
        }
    }

    pub fn handle(&self) -> RefreshHandle {
        RefreshHandle {
            requests: self.requests.clone(),
        }
    }

    async fn refresh(&self) {
        // failures are already recorded on the dashboard
        let _ = refresh_once(self.source.as_ref(), &self.dashboard).await;
    }

    /// Runs the initial refresh, then serves ticks and requests until
    /// `shutdown` flips to true or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "Poller started (source: {}, interval: {:?})",
            self.source.describe(),
            self.interval
        );
        self.refresh().await;

        let mut ticker = self.interval.map(|period| {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker
        });

        loop {
            let tick = async {
                match ticker.as_mut() {
                    Some(ticker) => {
                        ticker.tick().await;
                    }
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
                _ = self.requests.notified() => debug!("Manual refresh requested"),
                _ = tick => debug!("Poll interval elapsed"),
            }

            self.refresh().await;
        }

        info!("Poller stopped");
    }
}
