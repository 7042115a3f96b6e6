use cucumber::{given, then, when, World};
use parking_lot::RwLock;
use serde_json::{json, Value};
use snapshot_feed::{FeedConfig, FeedSource, Poller, SharedDashboard};
use std::sync::Arc;
use std::time::Duration;
use tentacle_core::SnapshotSource;
use tentacle_dashboard::{router, AppState};
use tentacle_state::Dashboard;
use tokio::net::TcpListener;
use tokio::sync::watch;

#[derive(Debug, World)]
#[world(init = Self::new)]
struct DashboardWorld {
    base_url: String,
    http_client: reqwest::Client,
    last_status: Option<u16>,
    last_response: Option<Value>,
    shutdown: Option<watch::Sender<bool>>,
}

impl DashboardWorld {
    fn new() -> Self {
        Self {
            base_url: String::new(),
            http_client: reqwest::Client::new(),
            last_status: None,
            last_response: None,
            shutdown: None,
        }
    }

    async fn record(&mut self, response: reqwest::Response) {
        self.last_status = Some(response.status().as_u16());
        self.last_response = Some(response.json().await.expect("Failed to parse response"));
    }

    async fn get_json(&self, path: &str) -> Value {
        self.http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse response")
    }
}

/// Walks a dotted path such as `incidents.0.status`.
fn field<'a>(value: &'a Value, path: &str) -> &'a Value {
    path.split('.').fold(value, |current, key| match key.parse::<usize>() {
        Ok(index) => &current[index],
        Err(_) => &current[key],
    })
}

fn expected_value(raw: &str) -> Value {
    raw.parse::<i64>().map(|n| json!(n)).unwrap_or_else(|_| json!(raw))
}

#[given("a running Tentacle Dashboard on the static feed")]
async fn given_running_dashboard(world: &mut DashboardWorld) {
    let source = FeedSource::from_config(&FeedConfig::default()).expect("static feed");
    let feed = source.describe();
    let dashboard: SharedDashboard = Arc::new(RwLock::new(Dashboard::new()));
    let poller = Poller::new(Arc::new(source), dashboard.clone(), None);
    let refresh = poller.handle();
    let (stop, shutdown) = watch::channel(false);
    tokio::spawn(poller.run(shutdown));

    let app = router(AppState {
        dashboard: dashboard.clone(),
        refresh,
        feed,
    });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    world.base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    for _ in 0..50 {
        if dashboard.read().stats().successful > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(dashboard.read().stats().successful, 1, "initial refresh did not run");
    world.shutdown = Some(stop);
}

#[when(expr = "I request {string}")]
async fn when_request(world: &mut DashboardWorld, path: String) {
    let response = world
        .http_client
        .get(format!("{}{}", world.base_url, path))
        .send()
        .await
        .expect("Failed to send request");
    world.record(response).await;
}

#[when(expr = "I post to {string}")]
async fn when_post(world: &mut DashboardWorld, path: String) {
    let response = world
        .http_client
        .post(format!("{}{}", world.base_url, path))
        .send()
        .await
        .expect("Failed to send request");
    world.record(response).await;
}

#[when(expr = "I set incident {string} to {string}")]
async fn when_set_incident(world: &mut DashboardWorld, id: String, status: String) {
    let response = world
        .http_client
        .put(format!("{}/api/v1/incidents/{}/status", world.base_url, id))
        .json(&json!({ "status": status }))
        .send()
        .await
        .expect("Failed to send request");
    world.record(response).await;
}

#[then(expr = "the response status should be {int}")]
async fn then_status(world: &mut DashboardWorld, expected: u16) {
    assert_eq!(world.last_status, Some(expected));
}

#[then(expr = "the field {string} should be {string}")]
async fn then_field_string(world: &mut DashboardWorld, path: String, expected: String) {
    let response = world.last_response.as_ref().expect("No response available");
    assert_eq!(field(response, &path), &expected_value(&expected), "in {response}");
}

#[then(expr = "the field {string} should be {int}")]
async fn then_field_int(world: &mut DashboardWorld, path: String, expected: i64) {
    let response = world.last_response.as_ref().expect("No response available");
    assert_eq!(field(response, &path), &json!(expected), "in {response}");
}

#[then(expr = "eventually the field {string} of {string} should be {int}")]
async fn then_eventually(world: &mut DashboardWorld, path: String, route: String, expected: i64) {
    let mut last = Value::Null;
    for _ in 0..50 {
        last = world.get_json(&route).await;
        if field(&last, &path) == &json!(expected) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("{path} never reached {expected}: {last}");
}

#[tokio::main]
async fn main() {
    DashboardWorld::run("tests/features").await;
}
