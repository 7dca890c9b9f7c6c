//! Common validation utilities.

use validator::ValidationError;

/// Smallest search radius the map view accepts, in kilometers.
pub const MIN_RADIUS_KM: u32 = 1;

/// Largest search radius the map view accepts, in kilometers.
pub const MAX_RADIUS_KM: u32 = 20;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a map search radius in kilometers.
pub fn validate_radius_km(km: u32) -> Result<(), ValidationError> {
    if (MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&km) {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be between 1 and 20 km".into());
        Err(err)
    }
}

/// Validates that a monetary amount is finite and non-negative.
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be a non-negative number".into());
        Err(err)
    }
}
