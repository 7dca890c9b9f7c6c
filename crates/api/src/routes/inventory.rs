//! Inventory endpoint handlers.
//!
//! Stock status is always derived from quantity and minimum stock; any
//! status field sent by clients is ignored.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::food_item::{
    AddStockRequest, CreateFoodItemRequest, FoodItem, FoodItemFilter, InventoryStats,
    UpdateFoodItemRequest,
};
use domain::store::SubmitContext;
use shared::id::RecordId;
use tracing::info;
use validator::Validate;

use super::ListResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery, OptionalApiJson};

/// GET /api/v1/inventory?category=&status=&search=
pub async fn list_items(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<FoodItemFilter>,
) -> Json<ListResponse<FoodItem>> {
    Json(state.inventory().list(&filter).await.into())
}

/// Add an inventory item.
///
/// POST /api/v1/inventory
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateFoodItemRequest>,
) -> Result<(StatusCode, Json<FoodItem>), ApiError> {
    request.validate()?;

    let item = state
        .inventory()
        .create(request.into_draft(), &SubmitContext::current())
        .await?;

    info!(
        item_id = %item.id,
        name = %item.name,
        quantity = item.quantity,
        status = %item.status,
        "Inventory item added"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/inventory/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<FoodItem>, ApiError> {
    state
        .inventory()
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::record_not_found("Inventory item", id.as_str()))
}

/// PUT /api/v1/inventory/:id
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    ApiJson(request): ApiJson<UpdateFoodItemRequest>,
) -> Result<Json<FoodItem>, ApiError> {
    request.validate()?;

    let item = state
        .inventory()
        .update(&id, request, &SubmitContext::current())
        .await?
        .ok_or_else(|| ApiError::record_not_found("Inventory item", id.as_str()))?;

    info!(item_id = %item.id, quantity = item.quantity, status = %item.status, "Inventory item updated");

    Ok(Json(item))
}

/// Restock quick action.
///
/// POST /api/v1/inventory/:id/add-stock
///
/// Without a body amount the configured restock increment is added. A body
/// that fails to parse is rejected before the store is touched.
pub async fn add_stock(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    OptionalApiJson(request): OptionalApiJson<AddStockRequest>,
) -> Result<Json<FoodItem>, ApiError> {
    let request = request.unwrap_or_default();
    request.validate()?;
    let amount = request
        .amount
        .unwrap_or(state.config.inventory.restock_increment);

    let item = state
        .inventory()
        .add_stock(&id, amount)
        .await
        .ok_or_else(|| ApiError::record_not_found("Inventory item", id.as_str()))?;

    info!(
        item_id = %item.id,
        added = amount,
        quantity = item.quantity,
        status = %item.status,
        "Stock added"
    );

    Ok(Json(item))
}

/// DELETE /api/v1/inventory/:id
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<RecordId>) -> StatusCode {
    if state.inventory().delete(&id).await {
        info!(item_id = %id, "Inventory item deleted");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/inventory/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<InventoryStats> {
    Json(state.inventory().stats().await)
}

/// Distinct categories in store order, for the category filter options.
///
/// GET /api/v1/inventory/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.inventory().categories().await)
}
