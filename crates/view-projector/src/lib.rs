//! # View Projector
//!
//! Maps agents, incidents and system status to display attributes: color
//! tokens, aggregate counts and workload bar fill. Every function is pure
//! and total.

pub use tentacle_core;

mod color;
mod view;

pub use color::{severity_color_of, status_color_of, system_status_color_of, ColorToken};
pub use view::{
    active_agent_count, agent_card, incident_row, metrics_panel, project,
    resolved_incident_ratio, workload_bar_fraction, AgentCard, DashboardView, IncidentRow,
    MetricsPanel, StatusIndicator,
};

