//! Map search view handlers.
//!
//! Device geolocation happens on the client; the locate flow receives the
//! reported coordinate.

use axum::{extract::State, Json};
use domain::models::map::{Coordinate, LocationDetails, MapView};
use serde::{Deserialize, Serialize};
use storage::repositories::SearchOutcome;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiJson;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetRadiusRequest {
    #[validate(custom(function = "shared::validation::validate_radius_km"))]
    pub radius_km: u32,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Whether the view moved to a search result.
    pub moved: bool,
    pub view: MapView,
}

/// GET /api/v1/map
pub async fn get_view(State(state): State<AppState>) -> Json<MapView> {
    Json(state.map().view().await)
}

/// PUT /api/v1/map/radius
pub async fn set_radius(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SetRadiusRequest>,
) -> Result<Json<MapView>, ApiError> {
    request.validate()?;
    let view = state.map().set_radius_km(request.radius_km).await?;
    info!(radius_km = request.radius_km, "Map radius changed");
    Ok(Json(view))
}

/// Center the map on the position reported by the device.
///
/// POST /api/v1/map/locate
pub async fn locate(
    State(state): State<AppState>,
    ApiJson(coordinate): ApiJson<Coordinate>,
) -> Result<Json<LocationDetails>, ApiError> {
    coordinate.validate()?;
    let details = state.map().locate(state.geocoder.as_ref(), coordinate).await;
    info!(lat = details.lat, lng = details.lng, address = %details.address, "Map centered on device");
    Ok(Json(details))
}

/// Move the map to the location matching a free-text query.
///
/// POST /api/v1/map/search
///
/// A blank query leaves the view unchanged.
pub async fn search(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let response = match state.map().search(state.geocoder.as_ref(), &request.query).await? {
        SearchOutcome::Moved(view) => {
            info!(query = %request.query.trim(), "Map moved to search result");
            SearchResponse { moved: true, view }
        }
        SearchOutcome::Ignored(view) => SearchResponse { moved: false, view },
    };
    Ok(Json(response))
}
