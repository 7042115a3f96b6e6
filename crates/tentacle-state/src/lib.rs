pub use tentacle_core;

mod dashboard;
mod incident_log;
mod registry;
mod subscription;

pub use dashboard::{Dashboard, RefreshStats};
pub use incident_log::IncidentLog;
pub use registry::AgentRegistry;
pub use subscription::{SubscriptionId, Subscribers};

// Re-export core types for convenience
pub use tentacle_core::{DashboardError, Result, Snapshot, SystemStatus};
