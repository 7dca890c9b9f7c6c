//! NGO partner endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::partner::{
    CreatePartnerRequest, NgoPartner, PartnerFilter, PartnerStats, UpdatePartnerRequest,
};
use domain::store::SubmitContext;
use shared::id::RecordId;
use tracing::info;
use validator::Validate;

use super::ListResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery};

/// GET /api/v1/partners?type=&status=&search=
pub async fn list_partners(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<PartnerFilter>,
) -> Json<ListResponse<NgoPartner>> {
    Json(state.partners().list(&filter).await.into())
}

/// Add a partner dated today with no donations yet.
///
/// POST /api/v1/partners
pub async fn create_partner(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePartnerRequest>,
) -> Result<(StatusCode, Json<NgoPartner>), ApiError> {
    request.validate()?;

    let partner = state
        .partners()
        .create(request.into_draft(), &SubmitContext::current())
        .await?;

    info!(partner_id = %partner.id, name = %partner.name, "Partner added");

    Ok((StatusCode::CREATED, Json(partner)))
}

/// GET /api/v1/partners/:id
pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<NgoPartner>, ApiError> {
    state
        .partners()
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::record_not_found("Partner", id.as_str()))
}

/// PUT /api/v1/partners/:id
pub async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ApiJson(request): ApiJson<UpdatePartnerRequest>,
) -> Result<Json<NgoPartner>, ApiError> {
    request.validate()?;

    let partner = state
        .partners()
        .update(&id, request, &SubmitContext::current())
        .await?
        .ok_or_else(|| ApiError::record_not_found("Partner", id.as_str()))?;

    info!(partner_id = %partner.id, status = %partner.status, "Partner updated");

    Ok(Json(partner))
}

/// DELETE /api/v1/partners/:id
pub async fn delete_partner(State(state): State<AppState>, Path(id): Path<RecordId>) -> StatusCode {
    if state.partners().delete(&id).await {
        info!(partner_id = %id, "Partner removed");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/partners/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<PartnerStats> {
    Json(state.partners().stats().await)
}

/// Distinct partner types in store order, for the type filter options.
///
/// GET /api/v1/partners/types
pub async fn list_types(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.partners().types().await)
}
