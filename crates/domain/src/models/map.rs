//! Map search view state.
//!
//! The view tracks where the map is centered, the search radius drawn around
//! the center, the markers on the map and the details of the last located
//! position. Geocoding happens outside the view (see
//! [`crate::services::map_search`]); the view only applies results.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Jalandhar, Punjab.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 31.326,
    lng: 75.576,
};

pub const DEFAULT_RADIUS_METERS: u32 = 5_000;

/// Zoom level when the view is first shown.
pub const DEFAULT_ZOOM: u8 = 12;

/// Zoom level after moving to a search result.
pub const SEARCH_ZOOM: u8 = 14;

/// Address shown when reverse geocoding fails.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// Map view errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MapError {
    #[error("Radius must be between 1 and 20 km, got {0}")]
    InvalidRadius(u32),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Location not found. Please try another search.")]
    LocationNotFound,
}

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub lat: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, MapError> {
        let coordinate = Self { lat, lng };
        coordinate
            .validate()
            .map_err(|e| MapError::InvalidCoordinate(e.to_string()))?;
        Ok(coordinate)
    }
}

/// Address and position of the last located point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl LocationDetails {
    pub fn new(coordinate: Coordinate, address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            lat: coordinate.lat,
            lng: coordinate.lng,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// State of the map search view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: Coordinate,
    pub radius_meters: u32,
    pub zoom: u8,
    pub markers: Vec<Coordinate>,
    pub location_details: Option<LocationDetails>,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_RADIUS_METERS)
    }
}

impl MapView {
    pub fn new(center: Coordinate, radius_meters: u32) -> Self {
        Self {
            center,
            radius_meters,
            zoom: DEFAULT_ZOOM,
            markers: Vec::new(),
            location_details: None,
        }
    }

    pub fn radius_km(&self) -> f64 {
        f64::from(self.radius_meters) / 1000.0
    }

    /// Sets the search radius. The view is unchanged on error.
    pub fn set_radius_km(&mut self, km: u32) -> Result<(), MapError> {
        shared::validation::validate_radius_km(km).map_err(|_| MapError::InvalidRadius(km))?;
        self.radius_meters = km * 1000;
        Ok(())
    }

    /// Centers the view on a located position and shows its details.
    pub fn show_location(&mut self, details: LocationDetails) -> &LocationDetails {
        let coordinate = details.coordinate();
        self.center = coordinate;
        self.markers = vec![coordinate];
        self.location_details.insert(details)
    }

    /// Centers the view on a search result.
    pub fn show_search_result(&mut self, coordinate: Coordinate) {
        self.center = coordinate;
        self.markers = vec![coordinate];
        self.zoom = SEARCH_ZOOM;
    }
}
