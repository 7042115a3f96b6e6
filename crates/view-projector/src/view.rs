//! Dashboard view model
//!
//! Everything a front end needs to paint the dashboard, derived fresh from
//! the current agents and incidents. Nothing here keeps state.

use crate::color::{severity_color_of, status_color_of, system_status_color_of, ColorToken};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tentacle_core::{
    Agent, AgentStatus, Incident, IncidentId, IncidentStatus, PlatformMetrics, SystemStatus,
    MAX_PERCENT,
};

/// Fill of the workload bar, `workload / 100`, clamped to [0, 1].
pub fn workload_bar_fraction(agent: &Agent) -> f64 {
    f64::from(agent.workload.min(MAX_PERCENT)) / f64::from(MAX_PERCENT)
}

/// The "Active Tentacles" figure.
pub fn active_agent_count(agents: &[Agent]) -> usize {
    agents
        .iter()
        .filter(|a| a.status == AgentStatus::Active)
        .count()
}

/// Share of logged incidents already resolved. `None` for an empty log.
pub fn resolved_incident_ratio(incidents: &[Incident]) -> Option<f64> {
    if incidents.is_empty() {
        return None;
    }
    let resolved = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Resolved)
        .count();
    Some(resolved as f64 / incidents.len() as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusIndicator {
    pub label: String,
    pub color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentCard {
    pub id: String,
    pub kind: String,
    pub status: String,
    pub status_color: ColorToken,
    pub intelligence: u8,
    pub workload: u8,
    pub workload_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRow {
    pub id: IncidentId,
    pub kind: String,
    /// Upper-cased for the badge.
    pub severity_label: String,
    pub severity_color: ColorToken,
    pub handled_by: String,
    pub status: String,
    pub status_color: ColorToken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsPanel {
    pub active_agents: usize,
    pub total_agents: usize,
    pub open_incidents: usize,
    pub resolved_incident_percent: Option<f64>,
    pub uptime_percentage: Option<f64>,
    pub mttr_minutes: Option<u32>,
    pub autonomous_resolution_percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub system_status: StatusIndicator,
    pub agents: Vec<AgentCard>,
    pub incidents: Vec<IncidentRow>,
    pub metrics: MetricsPanel,
    pub last_refreshed_at: Option<DateTime<Utc>>,
}

pub fn agent_card(agent: &Agent) -> AgentCard {
    AgentCard {
        id: agent.id.clone(),
        kind: agent.kind.to_string(),
        status: agent.status.to_string(),
        status_color: status_color_of(agent.status),
        intelligence: agent.intelligence,
        workload: agent.workload,
        workload_fraction: workload_bar_fraction(agent),
    }
}

/// Incident statuses go through the agent status palette, which has no
/// entry for them, so their badge renders neutral.
pub fn incident_row(incident: &Incident) -> IncidentRow {
    IncidentRow {
        id: incident.id.clone(),
        kind: incident.kind.clone(),
        severity_label: incident.severity.as_str().to_uppercase(),
        severity_color: severity_color_of(incident.severity),
        handled_by: incident.owning_agent_kind.to_string(),
        status: incident.status.to_string(),
        status_color: status_color_of(incident.status),
    }
}

pub fn metrics_panel(
    agents: &[Agent],
    incidents: &[Incident],
    platform: Option<&PlatformMetrics>,
) -> MetricsPanel {
    MetricsPanel {
        active_agents: active_agent_count(agents),
        total_agents: agents.len(),
        open_incidents: incidents
            .iter()
            .filter(|i| i.status != IncidentStatus::Resolved)
            .count(),
        resolved_incident_percent: resolved_incident_ratio(incidents).map(|r| r * 100.0),
        uptime_percentage: platform.map(|m| m.uptime_percentage),
        mttr_minutes: platform.map(|m| m.mttr_minutes),
        autonomous_resolution_percent: platform.map(|m| m.autonomous_resolution_rate * 100.0),
    }
}

/// Build the full view. Listing order follows the input order.
pub fn project(
    agents: &[Agent],
    incidents: &[Incident],
    system_status: SystemStatus,
    platform: Option<&PlatformMetrics>,
    last_refreshed_at: Option<DateTime<Utc>>,
) -> DashboardView {
    DashboardView {
        system_status: StatusIndicator {
            label: system_status.as_str().to_uppercase(),
            color: system_status_color_of(system_status),
        },
        agents: agents.iter().map(agent_card).collect(),
        incidents: incidents.iter().map(incident_row).collect(),
        metrics: metrics_panel(agents, incidents, platform),
        last_refreshed_at,
    }
}
