//! Donation endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::donation::{
    CreateDonationRequest, Donation, DonationFilter, DonationStats, UpdateDonationRequest,
};
use domain::store::SubmitContext;
use shared::id::RecordId;
use tracing::info;
use validator::Validate;

use super::ListResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery};

/// List donations matching the filters.
///
/// GET /api/v1/donations?status=&type=&search=
pub async fn list_donations(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<DonationFilter>,
) -> Json<ListResponse<Donation>> {
    Json(state.donations().list(&filter).await.into())
}

/// Record a new donation.
///
/// POST /api/v1/donations
pub async fn create_donation(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateDonationRequest>,
) -> Result<(StatusCode, Json<Donation>), ApiError> {
    request.validate()?;

    let donation = state
        .donations()
        .create(request.into_draft(), &SubmitContext::current())
        .await?;

    info!(
        donation_id = %donation.id,
        donor = %donation.donor,
        amount = donation.amount,
        "Donation recorded"
    );

    Ok((StatusCode::CREATED, Json(donation)))
}

/// GET /api/v1/donations/:id
pub async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Donation>, ApiError> {
    state
        .donations()
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::record_not_found("Donation", id.as_str()))
}

/// Update the supplied fields of a donation.
///
/// PUT /api/v1/donations/:id
pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ApiJson(request): ApiJson<UpdateDonationRequest>,
) -> Result<Json<Donation>, ApiError> {
    request.validate()?;

    let donation = state
        .donations()
        .update(&id, request, &SubmitContext::current())
        .await?
        .ok_or_else(|| ApiError::record_not_found("Donation", id.as_str()))?;

    info!(donation_id = %donation.id, "Donation updated");

    Ok(Json(donation))
}

/// DELETE /api/v1/donations/:id
///
/// Deleting an unknown id succeeds without effect.
pub async fn delete_donation(State(state): State<AppState>, Path(id): Path<RecordId>) -> StatusCode {
    if state.donations().delete(&id).await {
        info!(donation_id = %id, "Donation deleted");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/donations/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<DonationStats> {
    Json(state.donations().stats().await)
}
