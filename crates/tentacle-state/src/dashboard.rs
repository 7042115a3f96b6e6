//! Dashboard controller
//!
//! Owns the agent registry, the incident log and the process-wide
//! [`SystemStatus`]. Status moves `initializing -> operational` on the first
//! good snapshot, to `degraded` on any failed refresh, and back to
//! `operational` on the next good one. Failed refreshes never clear data.

use crate::incident_log::IncidentLog;
use crate::registry::AgentRegistry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tentacle_core::{
    DashboardError, Incident, IncidentId, IncidentStatus, PlatformMetrics, Result, Snapshot,
    SnapshotSource, SystemStatus,
};
use tracing::{info, instrument, warn};

/// Refresh counters for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshStats {
    pub successful: u64,
    pub failed: u64,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    agents: AgentRegistry,
    incidents: IncidentLog,
    metrics: Option<PlatformMetrics>,
    status: SystemStatus,
    last_refreshed_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
    stats: RefreshStats,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a snapshot to both collections.
    ///
    /// The whole snapshot is validated first, so either both collections
    /// are replaced or neither is. A rejected snapshot degrades the status.
    #[instrument(skip(self, snapshot), fields(agents = snapshot.agents.len(), incidents = snapshot.incidents.len()))]
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) -> Result<()> {
        if let Err(e) = snapshot.validate() {
            self.record_failure(&e);
            return Err(e);
        }

        let Snapshot {
            agents,
            incidents,
            metrics,
        } = snapshot;
        self.agents.load_snapshot(agents)?;
        self.incidents.load_snapshot(incidents)?;
        self.metrics = metrics;

        self.last_refreshed_at = Some(Utc::now());
        self.last_error = None;
        self.stats.successful += 1;
        self.set_status(SystemStatus::Operational);
        Ok(())
    }

    /// Note a failed refresh. Data from the last good snapshot stays.
    pub fn record_failure(&mut self, error: &DashboardError) {
        warn!(kind = error.kind(), "Refresh failed: {}", error);
        self.last_error = Some(error.to_string());
        self.stats.failed += 1;
        self.set_status(SystemStatus::Degraded);
    }

    /// Fetch from `source` and apply the result.
    pub async fn refresh<S>(&mut self, source: &S) -> Result<()>
    where
        S: SnapshotSource + ?Sized,
    {
        match source.fetch_snapshot().await {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    pub fn update_incident_status(
        &mut self,
        id: &IncidentId,
        new_status: IncidentStatus,
    ) -> Result<Incident> {
        self.incidents.update_status(id, new_status)
    }

    fn set_status(&mut self, next: SystemStatus) {
        if self.status == next {
            return;
        }
        match next {
            SystemStatus::Degraded => warn!("System status {} -> {}", self.status, next),
            _ => info!("System status {} -> {}", self.status, next),
        }
        self.status = next;
    }

    pub fn status(&self) -> SystemStatus {
        self.status
    }

    pub fn agents(&self) -> &AgentRegistry {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut AgentRegistry {
        &mut self.agents
    }

    pub fn incidents(&self) -> &IncidentLog {
        &self.incidents
    }

    pub fn incidents_mut(&mut self) -> &mut IncidentLog {
        &mut self.incidents
    }

    pub fn metrics(&self) -> Option<&PlatformMetrics> {
        self.metrics.as_ref()
    }

    pub fn last_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed_at
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn stats(&self) -> RefreshStats {
        self.stats
    }
}
