//! Baked-in demo data

use async_trait::async_trait;
use tentacle_core::{
    Agent, AgentKind, AgentStatus, Incident, IncidentStatus, PlatformMetrics, Result, Severity,
    Snapshot, SnapshotSource,
};

/// Serves a fixed snapshot. Used until a telemetry service exists, and in
/// tests.
#[derive(Debug, Clone)]
pub struct StaticSnapshotSource {
    snapshot: Snapshot,
}

impl StaticSnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Eight active tentacles, one per kind, and three incidents.
    pub fn demo() -> Self {
        Self::new(Snapshot::new(demo_agents(), demo_incidents()).with_metrics(demo_metrics()))
    }
}

impl Default for StaticSnapshotSource {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshotSource {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.snapshot.agents.clone())
    }

    async fn fetch_incidents(&self) -> Result<Vec<Incident>> {
        Ok(self.snapshot.incidents.clone())
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!(
            "static ({} agents, {} incidents)",
            self.snapshot.agents.len(),
            self.snapshot.incidents.len()
        )
    }
}

pub fn demo_agents() -> Vec<Agent> {
    use AgentKind::*;
    [
        ("detection-001", Detection, 95, 73),
        ("response-001", Response, 89, 45),
        ("learning-001", Learning, 92, 67),
        ("security-001", Security, 88, 23),
        ("capacity-001", Capacity, 85, 56),
        ("network-001", Network, 90, 34),
        ("data-001", Data, 87, 78),
        ("meta-001", Meta, 93, 42),
    ]
    .into_iter()
    .map(|(id, kind, intelligence, workload)| {
        Agent::new(id, kind, AgentStatus::Active, intelligence, workload)
    })
    .collect()
}

pub fn demo_incidents() -> Vec<Incident> {
    vec![
        Incident::new(
            1u64,
            "CPU Spike",
            Severity::Medium,
            IncidentStatus::Resolving,
            AgentKind::Detection,
        ),
        Incident::new(
            2u64,
            "Memory Leak",
            Severity::High,
            IncidentStatus::Resolved,
            AgentKind::Response,
        ),
        Incident::new(
            3u64,
            "Network Latency",
            Severity::Low,
            IncidentStatus::Monitoring,
            AgentKind::Network,
        ),
    ]
}

pub fn demo_metrics() -> PlatformMetrics {
    PlatformMetrics {
        uptime_percentage: 99.97,
        mttr_minutes: 8,
        autonomous_resolution_rate: 0.85,
    }
}
