//! Report endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::report::{Report, ReportDraft, ReportFilter, ReportStats};
use domain::store::SubmitContext;
use shared::id::RecordId;
use tracing::{info, warn};
use validator::Validate;

use super::ListResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery};

/// GET /api/v1/reports?type=&status=&search=
pub async fn list_reports(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ReportFilter>,
) -> Json<ListResponse<Report>> {
    Json(state.reports().list(&filter).await.into())
}

/// Generate a report.
///
/// POST /api/v1/reports
///
/// The report is stored as Processing and completes after the configured
/// delay unless it is deleted first.
pub async fn generate_report(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ReportDraft>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    draft.validate()?;

    let report = state
        .reports()
        .generate(draft, &SubmitContext::current())
        .await?;

    if !state.completions.schedule(report.id.clone()).await {
        warn!(report_id = %report.id, "Shutting down, report will stay processing");
    }

    info!(
        report_id = %report.id,
        report_type = %report.report_type,
        delay_ms = state.completions.delay().as_millis(),
        "Report generation started"
    );

    Ok((StatusCode::CREATED, Json(report)))
}

/// GET /api/v1/reports/:id
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Report>, ApiError> {
    state
        .reports()
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::record_not_found("Report", id.as_str()))
}

/// Delete a report and cancel its pending completion.
///
/// DELETE /api/v1/reports/:id
pub async fn delete_report(State(state): State<AppState>, Path(id): Path<RecordId>) -> StatusCode {
    let cancelled = state.completions.cancel(&id).await;
    if state.reports().delete(&id).await {
        info!(report_id = %id, cancelled_completion = cancelled, "Report deleted");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/reports/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<ReportStats> {
    Json(state.reports().stats().await)
}
