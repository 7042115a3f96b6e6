//! Agent registry
//!
//! Source of truth for the current agent set. Snapshots replace the whole
//! set or nothing; listeners see every successful change.

use crate::subscription::{SubscriptionId, Subscribers};
use tentacle_core::{validate_agents, Agent, AgentStatus, Result};
use tracing::{debug, info, instrument};

#[derive(Debug, Default)]
pub struct AgentRegistry {
    /// Display order is insertion order.
    agents: Vec<Agent>,
    subscribers: Subscribers<Agent>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every agent at once. On a validation error the current set is
    /// left untouched and no listener is called.
    #[instrument(skip(self, agents), fields(count = agents.len()))]
    pub fn load_snapshot(&mut self, agents: Vec<Agent>) -> Result<()> {
        validate_agents(&agents)?;
        self.agents = agents;
        info!("Agent snapshot loaded ({} agents)", self.agents.len());
        self.subscribers.notify(&self.agents);
        Ok(())
    }

    /// Replace an agent by id, keeping its display position, or append it.
    #[instrument(skip(self, agent), fields(agent_id = %agent.id))]
    pub fn upsert(&mut self, agent: Agent) -> Result<()> {
        agent.validate()?;
        match self.agents.iter_mut().find(|a| a.id == agent.id) {
            Some(existing) => {
                debug!("Replacing agent {}", agent.id);
                *existing = agent;
            }
            None => {
                debug!("Adding agent {}", agent.id);
                self.agents.push(agent);
            }
        }
        self.subscribers.notify(&self.agents);
        Ok(())
    }

    pub fn list_agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn count_by_status(&self, status: AgentStatus) -> usize {
        self.agents.iter().filter(|a| a.status == status).count()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&[Agent]) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
