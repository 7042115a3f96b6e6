//! # Snapshot Feed
//!
//! Where snapshots come from and how often they are fetched.
//!
//! - [`StaticSnapshotSource`]: baked-in demo data, the default feed
//! - [`HttpSnapshotSource`]: polls the telemetry service
//! - [`Poller`]: serial refresh loop with coalesced manual requests

pub use tentacle_core;

mod feed;
mod http_source;
mod poller;
mod static_source;

pub use feed::{FeedConfig, FeedKind, FeedSource};
pub use http_source::{HttpSnapshotSource, DEFAULT_REQUEST_TIMEOUT};
pub use poller::{refresh_once, Poller, RefreshHandle, SharedDashboard};
pub use static_source::{demo_agents, demo_incidents, demo_metrics, StaticSnapshotSource};
