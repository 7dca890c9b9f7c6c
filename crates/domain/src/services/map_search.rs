//! Map search flows.
//!
//! Both flows resolve their geocoding lookup first and only then touch the
//! view, so a failed lookup never leaves a half-applied change.

use tracing::{info, warn};

use super::geocoding::{Geocoder, GeocodingError};
use crate::models::map::{Coordinate, LocationDetails, MapError, MapView, ADDRESS_NOT_FOUND};

/// Resolves the address of a device-reported position.
///
/// A failed reverse lookup still yields details, with a placeholder address.
pub async fn resolve_location(geocoder: &dyn Geocoder, coordinate: Coordinate) -> LocationDetails {
    match geocoder.reverse(coordinate).await {
        Ok(address) => LocationDetails::new(coordinate, address),
        Err(e) => {
            warn!(error = %e, lat = coordinate.lat, lng = coordinate.lng, "Reverse geocoding failed");
            LocationDetails::new(coordinate, ADDRESS_NOT_FOUND)
        }
    }
}

/// Resolves a search query to a coordinate.
///
/// Returns `Ok(None)` for a blank query.
pub async fn resolve_search(
    geocoder: &dyn Geocoder,
    query: &str,
) -> Result<Option<Coordinate>, SearchFailure> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(None);
    }

    match geocoder.forward(query).await {
        Ok(found) => {
            info!(query = %query, address = %found.formatted_address, "Location found");
            Ok(Some(found.location))
        }
        Err(e) => {
            warn!(error = %e, query = %query, "Forward geocoding failed");
            Err(SearchFailure(e))
        }
    }
}

/// A search lookup that did not produce a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFailure(pub GeocodingError);

impl SearchFailure {
    /// Whether the lookup could not be attempted at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self.0, GeocodingError::Disabled)
    }
}

impl From<SearchFailure> for MapError {
    fn from(_: SearchFailure) -> Self {
        MapError::LocationNotFound
    }
}

/// Runs the my-location flow against a view.
pub async fn locate(
    view: &mut MapView,
    geocoder: &dyn Geocoder,
    coordinate: Coordinate,
) -> LocationDetails {
    let details = resolve_location(geocoder, coordinate).await;
    view.show_location(details).clone()
}

/// Runs the search flow against a view.
///
/// Returns whether the view moved. The view is unchanged on error.
pub async fn search(view: &mut MapView, geocoder: &dyn Geocoder, query: &str) -> Result<bool, MapError> {
    match resolve_search(geocoder, query).await? {
        Some(coordinate) => {
            view.show_search_result(coordinate);
            Ok(true)
        }
        None => Ok(false),
    }
}
