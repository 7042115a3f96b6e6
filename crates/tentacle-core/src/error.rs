//! Error types for the Tentacle dashboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    #[error("Incident not found: {incident_id}")]
    IncidentNotFound { incident_id: String },

    #[error("Invalid transition for incident {incident_id}: {from} -> {to}")]
    InvalidTransition {
        incident_id: String,
        from: String,
        to: String,
    },

    #[error("Snapshot fetch failed: {reason}")]
    Fetch { reason: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Serialization error: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },
}

impl DashboardError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch {
            reason: reason.into(),
        }
    }

    /// Short machine-readable name, used in logs and API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::IncidentNotFound { .. } => "not_found_error",
            Self::InvalidTransition { .. } => "invalid_transition_error",
            Self::Fetch { .. } => "fetch_error",
            Self::Config { .. } => "config_error",
            Self::SerializationError { .. } => "serialization_error",
        }
    }
}
