// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::mpsc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_controller::DashboardController;
use crate::application::scheduler::run_scheduler;
use crate::domain::time_labels::TimeLabelFormatter;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_data_source::HttpDataSource;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, trigger_refresh};
use crate::presentation::view::DashboardView;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let tz = config.display.tz()?;

    // Create data source (infrastructure layer)
    let source = Arc::new(HttpDataSource::new(
        &config.source.base_url,
        Duration::from_secs(config.source.timeout_secs),
    )?);

    // Views and controller (application layer)
    let view = Arc::new(DashboardView::new(
        TimeLabelFormatter::new(tz),
        config.display.tick_stride,
    ));
    let controller = Arc::new(DashboardController::new(
        source,
        view.panel.clone(),
        view.chart_views(),
        tz,
    ));

    let (manual_tx, manual_rx) = mpsc::channel(4);
    tokio::spawn(run_scheduler(
        controller,
        view.busy.clone(),
        config.refresh_settings(),
        manual_rx,
    ));

    let state = AppState {
        view,
        manual_refresh: manual_tx,
    };

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/refresh", post(trigger_refresh))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!(
        %addr,
        source = %config.source.base_url,
        "Starting air-monitor dashboard"
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
