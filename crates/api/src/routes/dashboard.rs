//! Dashboard overview handler.

use axum::{extract::State, Json};
use domain::models::DashboardOverview;

use crate::app::AppState;

/// Stat cards of every page.
///
/// GET /api/v1/dashboard
pub async fn get_overview(State(state): State<AppState>) -> Json<DashboardOverview> {
    Json(state.dashboard().overview().await)
}
