// HTTP request handlers
use crate::application::scheduler::ManualRefresh;
use crate::presentation::app_state::AppState;
use crate::presentation::view::DashboardSnapshot;
use axum::{extract::State, http::StatusCode, Json};
use tokio::sync::mpsc::error::TrySendError;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current panel text and chart state
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.view.snapshot())
}

/// Manual refresh trigger
pub async fn trigger_refresh(State(state): State<AppState>) -> StatusCode {
    match state.manual_refresh.try_send(ManualRefresh) {
        Ok(()) => StatusCode::ACCEPTED,
        Err(TrySendError::Full(_)) => {
            // Enough refreshes are already queued
            tracing::debug!("Manual refresh queue full, dropping trigger");
            StatusCode::ACCEPTED
        }
        Err(TrySendError::Closed(_)) => {
            tracing::warn!("Refresh scheduler is not running");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
