//! Google Geocoding API client.
//!
//! Implements the domain [`Geocoder`] trait over the JSON geocoding endpoint.

use std::time::Duration;

use async_trait::async_trait;
use domain::models::map::Coordinate;
use domain::services::geocoding::{GeocodedLocation, Geocoder, GeocodingError};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::GeocodingConfig;

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Geocoding API response structure.
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLatLng,
}

#[derive(Debug, Deserialize)]
struct GeocodeLatLng {
    lat: f64,
    lng: f64,
}

impl GeocodeResponse {
    /// The first result, when the service reports success.
    fn into_first(self) -> Result<GeocodeResult, GeocodingError> {
        if self.status != "OK" {
            return Err(match self.status.as_str() {
                "ZERO_RESULTS" => GeocodingError::NoResults,
                _ => GeocodingError::Status(match self.error_message {
                    Some(message) => format!("{}: {}", self.status, message),
                    None => self.status,
                }),
            });
        }
        self.results.into_iter().next().ok_or(GeocodingError::NoResults)
    }
}

/// HTTP geocoder for the Google Geocoding API.
pub struct HttpGeocoder {
    client: Client,
    config: GeocodingConfig,
}

impl HttpGeocoder {
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), GEOCODE_PATH)
    }

    async fn lookup(&self, param: (&str, &str)) -> Result<GeocodeResult, GeocodingError> {
        debug!(param = param.0, "Calling geocoding API");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[param, ("key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Request(format!("timeout after {}ms", self.config.timeout_ms))
                } else {
                    GeocodingError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Request(format!("HTTP {}", status)));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::Request(format!("invalid response: {}", e)))?;

        body.into_first()
    }
}

#[async_trait]
impl Geocoder for HttpGeocoder {
    async fn reverse(&self, coordinate: Coordinate) -> Result<String, GeocodingError> {
        let latlng = format!("{},{}", coordinate.lat, coordinate.lng);
        let result = self.lookup(("latlng", &latlng)).await?;
        Ok(result.formatted_address)
    }

    async fn forward(&self, query: &str) -> Result<GeocodedLocation, GeocodingError> {
        let result = self.lookup(("address", query)).await?;
        let location = Coordinate::new(result.geometry.location.lat, result.geometry.location.lng)
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        Ok(GeocodedLocation {
            formatted_address: result.formatted_address,
            location,
        })
    }
}
