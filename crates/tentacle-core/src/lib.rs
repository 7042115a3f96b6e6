//! # Tentacle Core
//!
//! Entities, ingestion checks and errors shared by every Tentacle dashboard
//! crate.
//!
//! ## Model
//! - Agents ("tentacles") with a kind, a status and two percentage metrics
//! - Incidents with a severity and a monotonic resolution status
//! - Snapshots: complete replacement sets, validated before anything applies

pub mod agent;
pub mod error;
pub mod incident;
pub mod snapshot;
pub mod source;

pub use agent::{validate_agents, Agent, AgentId, AgentKind, AgentStatus, MAX_PERCENT};
pub use error::{DashboardError, Result};
pub use incident::{validate_incidents, Incident, IncidentId, IncidentStatus, Severity};
pub use snapshot::{PlatformMetrics, Snapshot, SystemStatus};
pub use source::SnapshotSource;

/// Current dashboard version for compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information for logs and the health route
pub const BUILD_INFO: &str = concat!(
    "Tentacle Dashboard ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_NAME"),
    ")"
);

/// Telemetry service the dashboard polls when no URL is configured
pub const DEFAULT_BRAIN_URL: &str = "http://localhost:8080";

/// Standard API endpoints
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const METRICS: &str = "/metrics";
    /// Served by the telemetry service, polled by the dashboard.
    pub const API_V1_SNAPSHOT: &str = "/api/v1/snapshot";
    pub const API_V1_VIEW: &str = "/api/v1/view";
    pub const API_V1_AGENTS: &str = "/api/v1/agents";
    pub const API_V1_INCIDENTS: &str = "/api/v1/incidents";
    pub const API_V1_INCIDENT_STATUS: &str = "/api/v1/incidents/{id}/status";
    pub const API_V1_REFRESH: &str = "/api/v1/refresh";
}
