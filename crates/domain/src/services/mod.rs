//! Domain services for the food donation dashboard.
//!
//! Services contain business logic that operates on domain models.

pub mod geocoding;
pub mod inventory;
pub mod map_search;
pub mod reports;

pub use geocoding::{DisabledGeocoder, GeocodedLocation, Geocoder, GeocodingError, MockGeocoder};
pub use reports::CompletionOutcome;
