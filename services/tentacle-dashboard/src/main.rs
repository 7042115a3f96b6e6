//! # Tentacle Dashboard
//!
//! Status view for the monitoring fleet

use clap::Parser;
use parking_lot::RwLock;
use snapshot_feed::{FeedSource, Poller, SharedDashboard};
use std::sync::Arc;
use tentacle_core::{SnapshotSource, BUILD_INFO};
use tentacle_dashboard::{router, AppState, Config};
use tentacle_state::Dashboard;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting {}", BUILD_INFO);

    let source = FeedSource::from_config(&config.feed_config())?;
    let feed = source.describe();
    info!("Snapshot feed: {}", feed);

    let mut dashboard = Dashboard::new();
    dashboard.agents_mut().subscribe(|agents| {
        debug!("Agent set changed ({} agents)", agents.len());
    });
    dashboard.incidents_mut().subscribe(|incidents| {
        debug!("Incident log changed ({} incidents)", incidents.len());
    });
    let dashboard: SharedDashboard = Arc::new(RwLock::new(dashboard));

    let poller = Poller::new(Arc::new(source), dashboard.clone(), config.poll_interval());
    let refresh = poller.handle();
    let (stop, shutdown) = watch::channel(false);
    let poller_task = tokio::spawn(poller.run(shutdown));

    let app = router(AppState {
        dashboard,
        refresh,
        feed,
    });

    let listener = TcpListener::bind(config.listen).await?;
    info!("Tentacle Dashboard listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = stop.send(true);
    poller_task.await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
