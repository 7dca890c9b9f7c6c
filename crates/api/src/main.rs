use std::time::Duration;

use anyhow::{Context, Result};
use dashboard_api::{
    app::{self, AppState},
    config::Config,
    jobs::{JobScheduler, StoreMetricsJob},
    middleware, services,
};
use storage::Database;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics().context("failed to install metrics recorder")?;

    info!("Starting Food Donation Dashboard API v{}", env!("CARGO_PKG_VERSION"));

    // Build the in-memory stores
    let map = app::initial_map_view(&config.map)?;
    let db = if config.seed.load_sample_data {
        info!("Loading sample data");
        Database::seeded(map)?
    } else {
        Database::empty(map)
    };

    let geocoder = services::build_geocoder(&config.geocoding);
    let addr = config.socket_addr()?;
    let sample_interval = Duration::from_secs(config.metrics.store_sample_interval_secs);
    let state = AppState::new(config, db.clone(), geocoder);
    let completions = state.completions.clone();

    // Background jobs
    let mut scheduler = JobScheduler::new();
    scheduler.spawn(StoreMetricsJob::new(db, sample_interval));

    // Build application
    let app = app::create_app(state);

    // Start server
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    completions.shutdown().await;
    scheduler.shutdown(Duration::from_secs(5)).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
