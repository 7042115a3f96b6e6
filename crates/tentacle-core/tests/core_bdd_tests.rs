//! BDD Tests for Tentacle Core

use cucumber::{given, then, when, World};
use tentacle_core::*;

#[derive(Debug, World)]
#[world(init = Self::new)]
struct CoreWorld {
    snapshot: Snapshot,
    last_error: Option<DashboardError>,
    accepted: bool,
}

impl CoreWorld {
    fn new() -> Self {
        Self {
            snapshot: Snapshot::default(),
            last_error: None,
            accepted: false,
        }
    }

    fn record(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.accepted = true,
            Err(e) => self.last_error = Some(e),
        }
    }
}

#[given(expr = "an agent {string} of kind {string} with workload {int}")]
async fn given_agent(world: &mut CoreWorld, id: String, kind: String, workload: u8) {
    let kind: AgentKind = kind.parse().expect("known agent kind");
    world
        .snapshot
        .agents
        .push(Agent::new(id, kind, AgentStatus::Active, 90, workload));
}

#[when("I validate the snapshot")]
async fn when_validate(world: &mut CoreWorld) {
    let result = world.snapshot.validate();
    world.record(result);
}

#[when(expr = "I decode a snapshot whose agent status is {string}")]
async fn when_decode_with_status(world: &mut CoreWorld, status: String) {
    let body = format!(
        r#"{{"agents":[{{"id":"x-001","kind":"Meta","status":"{status}","intelligence":90,"workload":10}}],"incidents":[]}}"#
    );
    let result = Snapshot::from_json(&body).map(|_| ());
    world.record(result);
}

#[then("the snapshot should be accepted")]
async fn then_accepted(world: &mut CoreWorld) {
    assert!(world.accepted, "unexpected error: {:?}", world.last_error);
}

#[then(expr = "I should get a {string} error")]
async fn then_should_get_error(world: &mut CoreWorld, error_type: String) {
    let error = world.last_error.as_ref().expect("an error was expected");
    assert_eq!(error.kind(), error_type.replace(' ', "_"));
}

#[then(expr = "the error should mention {string}")]
async fn then_error_mentions(world: &mut CoreWorld, needle: String) {
    let error = world.last_error.as_ref().expect("an error was expected");
    assert!(error.to_string().contains(&needle));
}

#[then(expr = "moving an incident from {string} to {string} should be {word}")]
async fn then_transition_outcome(_world: &mut CoreWorld, from: String, to: String, outcome: String) {
    let from: IncidentStatus = from.parse().expect("known status");
    let to: IncidentStatus = to.parse().expect("known status");
    assert_eq!(from.can_transition_to(to), outcome == "allowed");
}

#[tokio::main]
async fn main() {
    CoreWorld::run("tests/features").await;
}
