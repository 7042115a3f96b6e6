//! Snapshot source capability

use crate::agent::Agent;
use crate::error::Result;
use crate::incident::Incident;
use crate::snapshot::Snapshot;
use async_trait::async_trait;

/// Anything that can produce the current agents and incidents.
///
/// Implementations decide where the data comes from (baked-in data, a
/// telemetry service). Consumers should prefer [`fetch_snapshot`] so both
/// collections come from the same observation.
///
/// [`fetch_snapshot`]: SnapshotSource::fetch_snapshot
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_agents(&self) -> Result<Vec<Agent>>;

    async fn fetch_incidents(&self) -> Result<Vec<Incident>>;

    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let agents = self.fetch_agents().await?;
        let incidents = self.fetch_incidents().await?;
        Ok(Snapshot::new(agents, incidents))
    }

    /// Short name for logs.
    fn describe(&self) -> String;
}
