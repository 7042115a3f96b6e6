//! Snapshot documents and platform-wide status

use crate::agent::{validate_agents, Agent};
use crate::error::{DashboardError, Result};
use crate::incident::{validate_incidents, Incident};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline figures reported by the telemetry service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub uptime_percentage: f64,
    pub mttr_minutes: u32,
    /// Share of incidents closed without an operator, 0..=1.
    pub autonomous_resolution_rate: f64,
}

impl PlatformMetrics {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.uptime_percentage) {
            return Err(DashboardError::validation(format!(
                "uptime_percentage {} outside [0,100]",
                self.uptime_percentage
            )));
        }
        if !(0.0..=1.0).contains(&self.autonomous_resolution_rate) {
            return Err(DashboardError::validation(format!(
                "autonomous_resolution_rate {} outside [0,1]",
                self.autonomous_resolution_rate
            )));
        }
        Ok(())
    }
}

/// A complete replacement set of entities, as served by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PlatformMetrics>,
}

impl Snapshot {
    pub fn new(agents: Vec<Agent>, incidents: Vec<Incident>) -> Self {
        Self {
            agents,
            incidents,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: PlatformMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Validates every part of the snapshot without applying anything.
    pub fn validate(&self) -> Result<()> {
        validate_agents(&self.agents)?;
        validate_incidents(&self.incidents)?;
        if let Some(metrics) = &self.metrics {
            metrics.validate()?;
        }
        Ok(())
    }

    /// Decodes a feed document. Any decode failure, including unknown
    /// enumeration values, is reported as a validation error.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| DashboardError::validation(format!("malformed snapshot: {e}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Initializing,
    Operational,
    Degraded,
}

impl SystemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Initializing => "initializing",
            SystemStatus::Operational => "operational",
            SystemStatus::Degraded => "degraded",
        }
    }
}

impl AsRef<str> for SystemStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
