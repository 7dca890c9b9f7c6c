//! Adapters for external services.

pub mod geocoding;

use std::sync::Arc;

use domain::services::geocoding::{DisabledGeocoder, Geocoder};
use tracing::{info, warn};

use crate::config::GeocodingConfig;

pub use geocoding::HttpGeocoder;

/// Builds the geocoder selected by configuration.
///
/// Falls back to [`DisabledGeocoder`] when geocoding is off or the client
/// cannot be built, so map lookups fail cleanly instead of blocking startup.
pub fn build_geocoder(config: &GeocodingConfig) -> Arc<dyn Geocoder> {
    if !config.enabled {
        info!("Geocoding disabled");
        return Arc::new(DisabledGeocoder);
    }

    match HttpGeocoder::new(config.clone()) {
        Ok(geocoder) => {
            info!(base_url = %config.base_url, "Geocoding enabled");
            Arc::new(geocoder)
        }
        Err(e) => {
            warn!(error = %e, "Failed to build geocoding client, geocoding disabled");
            Arc::new(DisabledGeocoder)
        }
    }
}
