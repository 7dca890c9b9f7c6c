//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;
use storage::RecordCounts;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: RecordCounts,
    pub pending_report_completions: usize,
    pub geocoding_enabled: bool,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Full health check endpoint.
///
/// Reports the record counts of every store alongside service details.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.db.counts().await,
        pending_report_completions: state.completions.pending_count().await,
        geocoding_enabled: state.config.geocoding.enabled,
    })
}

/// Liveness probe endpoint.
///
/// Returns 200 OK if the process is running.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// The stores live in memory, so the service is ready once it serves requests.
pub async fn ready(State(state): State<AppState>) -> Json<StatusResponse> {
    // Taking each store lock once proves no writer is stuck holding it
    let _ = state.db.counts().await;
    Json(StatusResponse {
        status: "ready".to_string(),
    })
}
