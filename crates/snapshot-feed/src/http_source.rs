//! Live feed from the telemetry service

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tentacle_core::{
    endpoints, Agent, DashboardError, Incident, Result, Snapshot, SnapshotSource,
};
use tracing::{debug, instrument};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Polls `GET {base}/api/v1/snapshot` for a JSON document with `agents`
/// and `incidents` arrays.
#[derive(Debug, Clone)]
pub struct HttpSnapshotSource {
    client: Client,
    snapshot_url: Url,
}

impl HttpSnapshotSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| DashboardError::Config {
            reason: format!("invalid telemetry base URL '{base_url}': {e}"),
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(DashboardError::Config {
                reason: format!("unsupported scheme '{}' in '{base_url}'", base.scheme()),
            });
        }
        let snapshot_url = base
            .join(endpoints::API_V1_SNAPSHOT)
            .map_err(|e| DashboardError::Config {
                reason: format!("cannot build snapshot URL from '{base_url}': {e}"),
            })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::Config {
                reason: format!("cannot build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            snapshot_url,
        })
    }

    pub fn snapshot_url(&self) -> &Url {
        &self.snapshot_url
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.fetch_snapshot().await?.agents)
    }

    async fn fetch_incidents(&self) -> Result<Vec<Incident>> {
        Ok(self.fetch_snapshot().await?.incidents)
    }

    #[instrument(skip(self), fields(url = %self.snapshot_url))]
    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let response = self
            .client
            .get(self.snapshot_url.clone())
            .send()
            .await
            .map_err(|e| DashboardError::fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::fetch(format!(
                "telemetry service answered {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::fetch(e.to_string()))?;
        debug!("Received {} byte snapshot", body.len());
        Snapshot::from_json(&body)
    }

    fn describe(&self) -> String {
        format!("http ({})", self.snapshot_url)
    }
}
