//! Incident log

use crate::subscription::{SubscriptionId, Subscribers};
use tentacle_core::{
    validate_incidents, DashboardError, Incident, IncidentId, IncidentStatus, Result,
};
use tracing::{info, instrument};

#[derive(Debug, Default)]
pub struct IncidentLog {
    incidents: Vec<Incident>,
    subscribers: Subscribers<Incident>,
}

impl IncidentLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same contract as [`AgentRegistry::load_snapshot`]: all or nothing.
    ///
    /// [`AgentRegistry::load_snapshot`]: crate::AgentRegistry::load_snapshot
    #[instrument(skip(self, incidents), fields(count = incidents.len()))]
    pub fn load_snapshot(&mut self, incidents: Vec<Incident>) -> Result<()> {
        validate_incidents(&incidents)?;
        self.incidents = incidents;
        info!("Incident snapshot loaded ({} incidents)", self.incidents.len());
        self.subscribers.notify(&self.incidents);
        Ok(())
    }

    /// Move an incident forward through monitoring -> resolving -> resolved.
    ///
    /// Setting the current status again is a no-op and notifies nobody.
    #[instrument(skip_all, fields(incident_id = %id, to = %new_status))]
    pub fn update_status(&mut self, id: &IncidentId, new_status: IncidentStatus) -> Result<Incident> {
        let incident = self
            .incidents
            .iter_mut()
            .find(|i| &i.id == id)
            .ok_or_else(|| DashboardError::IncidentNotFound {
                incident_id: id.to_string(),
            })?;

        let current = incident.status;
        if !current.can_transition_to(new_status) {
            return Err(DashboardError::InvalidTransition {
                incident_id: id.to_string(),
                from: current.to_string(),
                to: new_status.to_string(),
            });
        }
        if current == new_status {
            return Ok(incident.clone());
        }

        incident.status = new_status;
        let updated = incident.clone();
        info!("Incident {} moved {} -> {}", id, current, new_status);
        self.subscribers.notify(&self.incidents);
        Ok(updated)
    }

    pub fn list_incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn get(&self, id: &IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| &i.id == id)
    }

    pub fn count_by_status(&self, status: IncidentStatus) -> usize {
        self.incidents.iter().filter(|i| i.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Incident]) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tentacle_core::{AgentKind, Severity};

    fn log_with(status: IncidentStatus) -> IncidentLog {
        let mut log = IncidentLog::new();
        log.load_snapshot(vec![Incident::new(
            1u64,
            "CPU Spike",
            Severity::Medium,
            status,
            AgentKind::Detection,
        )])
        .unwrap();
        log
    }

    #[test]
    fn test_status_progresses_forward() {
        let mut log = log_with(IncidentStatus::Monitoring);
        let id = IncidentId::Number(1);

        let updated = log.update_status(&id, IncidentStatus::Resolving).unwrap();
        assert_eq!(updated.status, IncidentStatus::Resolving);
        log.update_status(&id, IncidentStatus::Resolved).unwrap();
        assert_eq!(log.count_by_status(IncidentStatus::Resolved), 1);
    }

    #[test]
    fn test_regression_is_rejected() {
        let mut log = log_with(IncidentStatus::Resolved);
        let err = log
            .update_status(&IncidentId::Number(1), IncidentStatus::Monitoring)
            .unwrap_err();

        match err {
            DashboardError::InvalidTransition { from, to, .. } => {
                assert_eq!(from, "resolved");
                assert_eq!(to, "monitoring");
            }
            other => panic!("Expected InvalidTransition, got {other:?}"),
        }
        assert_eq!(log.list_incidents()[0].status, IncidentStatus::Resolved);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut log = log_with(IncidentStatus::Monitoring);
        let err = log
            .update_status(&IncidentId::Text("inc_404".into()), IncidentStatus::Resolved)
            .unwrap_err();
        assert!(matches!(err, DashboardError::IncidentNotFound { .. }));
    }

    #[test]
    fn test_same_status_is_silent_no_op() {
        let mut log = log_with(IncidentStatus::Resolving);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        log.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        log.update_status(&IncidentId::Number(1), IncidentStatus::Resolving)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        log.update_status(&IncidentId::Number(1), IncidentStatus::Resolved)
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
