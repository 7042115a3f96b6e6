//! Agent ("tentacle") types and ingestion checks

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub type AgentId = String;

/// Upper bound for the percentage metrics carried by an agent.
pub const MAX_PERCENT: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    Detection,
    Response,
    Learning,
    Security,
    Capacity,
    Network,
    Data,
    Meta,
}

impl AgentKind {
    pub const ALL: [AgentKind; 8] = [
        AgentKind::Detection,
        AgentKind::Response,
        AgentKind::Learning,
        AgentKind::Security,
        AgentKind::Capacity,
        AgentKind::Network,
        AgentKind::Data,
        AgentKind::Meta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::Detection => "Detection",
            AgentKind::Response => "Response",
            AgentKind::Learning => "Learning",
            AgentKind::Security => "Security",
            AgentKind::Capacity => "Capacity",
            AgentKind::Network => "Network",
            AgentKind::Data => "Data",
            AgentKind::Meta => "Meta",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::validation(format!("unknown agent kind '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Inactive,
    Warning,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Inactive => "inactive",
            AgentStatus::Warning => "warning",
        }
    }
}

impl AsRef<str> for AgentStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(AgentStatus::Active),
            "inactive" => Ok(AgentStatus::Inactive),
            "warning" => Ok(AgentStatus::Warning),
            other => Err(DashboardError::validation(format!(
                "unknown agent status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    #[serde(alias = "type")]
    pub kind: AgentKind,
    pub status: AgentStatus,
    /// Quality score, percent.
    pub intelligence: u8,
    /// Current load, percent.
    pub workload: u8,
}

impl Agent {
    pub fn new(
        id: impl Into<AgentId>,
        kind: AgentKind,
        status: AgentStatus,
        intelligence: u8,
        workload: u8,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            status,
            intelligence,
            workload,
        }
    }

    /// Range checks for a single agent.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(DashboardError::validation("agent id must not be empty"));
        }
        if self.intelligence > MAX_PERCENT {
            return Err(DashboardError::validation(format!(
                "agent {}: intelligence {} outside [0,{MAX_PERCENT}]",
                self.id, self.intelligence
            )));
        }
        if self.workload > MAX_PERCENT {
            return Err(DashboardError::validation(format!(
                "agent {}: workload {} outside [0,{MAX_PERCENT}]",
                self.id, self.workload
            )));
        }
        Ok(())
    }
}

/// Checks a full agent snapshot: every agent in range and ids unique.
pub fn validate_agents(agents: &[Agent]) -> Result<()> {
    let mut seen = HashSet::with_capacity(agents.len());
    for agent in agents {
        agent.validate()?;
        if !seen.insert(agent.id.as_str()) {
            return Err(DashboardError::validation(format!(
                "duplicate agent id '{}'",
                agent.id
            )));
        }
    }
    Ok(())
}
