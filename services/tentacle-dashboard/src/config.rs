//! Service configuration, from flags or the environment

use clap::Parser;
use snapshot_feed::{FeedConfig, FeedKind};
use std::net::SocketAddr;
use std::time::Duration;
use tentacle_core::DEFAULT_BRAIN_URL;

#[derive(Debug, Clone, Parser)]
#[command(name = "tentacle-dashboard")]
#[command(about = "Tentacle Dashboard - status view for the monitoring fleet")]
#[command(version = tentacle_core::VERSION)]
pub struct Config {
    /// Base URL of the telemetry service
    #[arg(long, env = "TENTACLE_BRAIN_URL", default_value = DEFAULT_BRAIN_URL)]
    pub brain_url: String,

    /// Where snapshots come from: static or http
    #[arg(long, env = "TENTACLE_FEED", default_value = "static")]
    pub feed: FeedKind,

    /// Seconds between refreshes; unset or 0 disables polling
    #[arg(long, env = "TENTACLE_POLL_SECS")]
    pub poll_secs: Option<u64>,

    /// Per-request timeout for the http feed
    #[arg(long, env = "TENTACLE_REQUEST_TIMEOUT_SECS", default_value_t = 5)]
    pub request_timeout_secs: u64,

    /// Address the view is served on
    #[arg(long, env = "TENTACLE_LISTEN", default_value = "0.0.0.0:8090")]
    pub listen: SocketAddr,
}

impl Config {
    pub fn feed_config(&self) -> FeedConfig {
        FeedConfig {
            kind: self.feed,
            brain_url: self.brain_url.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        self.poll_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
