//! Feed selection

use crate::http_source::{HttpSnapshotSource, DEFAULT_REQUEST_TIMEOUT};
use crate::static_source::StaticSnapshotSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tentacle_core::{
    Agent, DashboardError, Incident, Result, Snapshot, SnapshotSource, DEFAULT_BRAIN_URL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    #[default]
    Static,
    Http,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Static => f.write_str("static"),
            FeedKind::Http => f.write_str("http"),
        }
    }
}

impl FromStr for FeedKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(FeedKind::Static),
            "http" => Ok(FeedKind::Http),
            other => Err(DashboardError::Config {
                reason: format!("unknown feed '{other}', expected 'static' or 'http'"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub kind: FeedKind,
    pub brain_url: String,
    pub request_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            kind: FeedKind::Static,
            brain_url: DEFAULT_BRAIN_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// The configured snapshot source.
#[derive(Debug, Clone)]
pub enum FeedSource {
    Static(StaticSnapshotSource),
    Http(HttpSnapshotSource),
}

impl FeedSource {
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        match config.kind {
            FeedKind::Static => Ok(FeedSource::Static(StaticSnapshotSource::demo())),
            FeedKind::Http => Ok(FeedSource::Http(HttpSnapshotSource::with_timeout(
                &config.brain_url,
                config.request_timeout,
            )?)),
        }
    }

    fn inner(&self) -> &dyn SnapshotSource {
        match self {
            FeedSource::Static(source) => source,
            FeedSource::Http(source) => source,
        }
    }
}

#[async_trait]
impl SnapshotSource for FeedSource {
    async fn fetch_agents(&self) -> Result<Vec<Agent>> {
        self.inner().fetch_agents().await
    }

    async fn fetch_incidents(&self) -> Result<Vec<Incident>> {
        self.inner().fetch_incidents().await
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot> {
        self.inner().fetch_snapshot().await
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }
}
