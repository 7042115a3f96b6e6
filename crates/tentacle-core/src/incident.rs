//! Incident types and the resolution lifecycle

use crate::agent::AgentKind;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Incident identifier. Feeds use either numbers or strings; all-digit
/// strings decode as numbers so `"1"` and `1` name the same incident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum IncidentId {
    Number(u64),
    Text(String),
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentId::Number(n) => write!(f, "{n}"),
            IncidentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for IncidentId {
    fn from(value: u64) -> Self {
        IncidentId::Number(value)
    }
}

/// Numeric text becomes a numeric id, matching how JSON feeds encode them.
impl From<&str> for IncidentId {
    fn from(value: &str) -> Self {
        value
            .parse::<u64>()
            .map(IncidentId::Number)
            .unwrap_or_else(|_| IncidentId::Text(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for IncidentId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(u64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => IncidentId::Number(n),
            Wire::Text(text) => IncidentId::from(text.as_str()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl AsRef<str> for Severity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(DashboardError::validation(format!(
                "unknown severity '{other}'"
            ))),
        }
    }
}

/// Resolution status. Variants are declared in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Monitoring,
    Resolving,
    Resolved,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Monitoring => "monitoring",
            IncidentStatus::Resolving => "resolving",
            IncidentStatus::Resolved => "resolved",
        }
    }

    /// Forward moves and staying put are allowed; going back is not.
    pub fn can_transition_to(self, next: IncidentStatus) -> bool {
        next >= self
    }
}

impl AsRef<str> for IncidentStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "monitoring" => Ok(IncidentStatus::Monitoring),
            "resolving" => Ok(IncidentStatus::Resolving),
            "resolved" => Ok(IncidentStatus::Resolved),
            other => Err(DashboardError::validation(format!(
                "unknown incident status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    /// Free-form label such as "CPU Spike".
    #[serde(alias = "type")]
    pub kind: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    /// Category of the handling agent. Not an agent id: several agents of
    /// the same kind are not told apart.
    #[serde(alias = "tentacle")]
    pub owning_agent_kind: AgentKind,
}

impl Incident {
    pub fn new(
        id: impl Into<IncidentId>,
        kind: impl Into<String>,
        severity: Severity,
        status: IncidentStatus,
        owning_agent_kind: AgentKind,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            severity,
            status,
            owning_agent_kind,
        }
    }
}

/// Checks a full incident snapshot for id uniqueness.
pub fn validate_incidents(incidents: &[Incident]) -> Result<()> {
    let mut seen = HashSet::with_capacity(incidents.len());
    for incident in incidents {
        if !seen.insert(&incident.id) {
            return Err(DashboardError::validation(format!(
                "duplicate incident id '{}'",
                incident.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions_are_monotonic() {
        use IncidentStatus::*;
        assert!(Monitoring.can_transition_to(Resolving));
        assert!(Resolving.can_transition_to(Resolved));
        assert!(Monitoring.can_transition_to(Resolved));
        assert!(Resolved.can_transition_to(Resolved));
        assert!(!Resolved.can_transition_to(Monitoring));
        assert!(!Resolving.can_transition_to(Monitoring));
    }

    #[test]
    fn test_legacy_incident_shape_decodes() {
        let json = r#"{"id":2,"type":"Memory Leak","severity":"high","status":"resolved","tentacle":"Response"}"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.id, IncidentId::Number(2));
        assert_eq!(incident.owning_agent_kind, AgentKind::Response);
        assert_eq!(incident.status, IncidentStatus::Resolved);
    }

    #[test]
    fn test_string_ids_decode() {
        let json = r#"{"id":"inc_000001","kind":"CPU Spike","severity":"low","status":"monitoring","owning_agent_kind":"Detection"}"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.id, IncidentId::Text("inc_000001".to_string()));
    }

    #[test]
    fn test_path_ids_prefer_numbers() {
        assert_eq!(IncidentId::from("7"), IncidentId::Number(7));
        assert_eq!(IncidentId::from("inc_7"), IncidentId::Text("inc_7".to_string()));
    }

    #[test]
    fn test_numeric_text_ids_decode_as_numbers() {
        let json = r#"{"id":"1","kind":"CPU Spike","severity":"low","status":"monitoring","owning_agent_kind":"Detection"}"#;
        let incident: Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.id, IncidentId::Number(1));
        assert_eq!(incident.id, IncidentId::from("1"));
    }

    #[test]
    fn test_number_and_numeric_text_ids_collide() {
        let json = r#"[
            {"id":1,"kind":"CPU Spike","severity":"low","status":"monitoring","owning_agent_kind":"Detection"},
            {"id":"1","kind":"Disk Full","severity":"high","status":"monitoring","owning_agent_kind":"Data"}
        ]"#;
        let incidents: Vec<Incident> = serde_json::from_str(json).unwrap();
        assert!(matches!(
            validate_incidents(&incidents),
            Err(DashboardError::Validation { .. })
        ));
    }

    #[test]
    fn test_duplicate_incident_ids_rejected() {
        let incidents = vec![
            Incident::new(1u64, "CPU Spike", Severity::Low, IncidentStatus::Monitoring, AgentKind::Detection),
            Incident::new(1u64, "Disk Full", Severity::High, IncidentStatus::Monitoring, AgentKind::Data),
        ];
        assert!(matches!(
            validate_incidents(&incidents),
            Err(DashboardError::Validation { .. })
        ));
    }
}
