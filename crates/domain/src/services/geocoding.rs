//! Geocoding service abstraction.
//!
//! Translates between coordinates and human-readable addresses. The HTTP
//! adapter lives in the API crate; [`MockGeocoder`] serves development and
//! tests.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::map::Coordinate;

/// Errors from a geocoding lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeocodingError {
    #[error("No results for the requested location")]
    NoResults,

    #[error("Geocoding service returned status {0}")]
    Status(String),

    #[error("Geocoding request failed: {0}")]
    Request(String),

    #[error("Geocoding is disabled")]
    Disabled,
}

/// A forward geocoding result.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub formatted_address: String,
    pub location: Coordinate,
}

/// Geocoding service trait.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Looks up the formatted address of a coordinate.
    async fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodingError>;

    /// Looks up the best matching location for a free-text query.
    async fn forward(&self, query: &str) -> Result<GeocodedLocation, GeocodingError>;
}

/// Geocoder used when no external service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGeocoder;

#[async_trait::async_trait]
impl Geocoder for DisabledGeocoder {
    async fn reverse(&self, _coordinate: Coordinate) -> Result<String, GeocodingError> {
        Err(GeocodingError::Disabled)
    }

    async fn forward(&self, _query: &str) -> Result<GeocodedLocation, GeocodingError> {
        Err(GeocodingError::Disabled)
    }
}

/// In-memory geocoder for development and testing.
///
/// Forward lookups match known places case-insensitively; reverse lookups
/// return a fixed address.
#[derive(Debug, Clone, Default)]
pub struct MockGeocoder {
    places: HashMap<String, GeocodedLocation>,
    reverse_address: Option<String>,
    /// Whether to simulate failures for testing.
    pub simulate_failure: bool,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock geocoder that fails every lookup.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn with_place(mut self, query: &str, address: &str, location: Coordinate) -> Self {
        self.places.insert(
            query.to_lowercase(),
            GeocodedLocation {
                formatted_address: address.to_string(),
                location,
            },
        );
        self
    }

    pub fn with_reverse_address(mut self, address: &str) -> Self {
        self.reverse_address = Some(address.to_string());
        self
    }
}

#[async_trait::async_trait]
impl Geocoder for MockGeocoder {
    async fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodingError> {
        if self.simulate_failure {
            tracing::warn!(lat = coordinate.lat, lng = coordinate.lng, "Mock geocoder simulating failure");
            return Err(GeocodingError::Request("simulated failure".to_string()));
        }
        self.reverse_address.clone().ok_or(GeocodingError::NoResults)
    }

    async fn forward(&self, query: &str) -> Result<GeocodedLocation, GeocodingError> {
        if self.simulate_failure {
            tracing::warn!(query = %query, "Mock geocoder simulating failure");
            return Err(GeocodingError::Request("simulated failure".to_string()));
        }
        self.places
            .get(&query.trim().to_lowercase())
            .cloned()
            .ok_or(GeocodingError::NoResults)
    }
}
