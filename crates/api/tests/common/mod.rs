//! Common test utilities for integration tests.
//!
//! Every test builds its own application over freshly seeded in-memory
//! stores, so tests never share state.

// Allow dead code in this module - not every integration test uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use dashboard_api::{
    app::{create_app, initial_map_view, AppState},
    config::Config,
};
use domain::models::map::Coordinate;
use domain::services::geocoding::{Geocoder, MockGeocoder};
use fake::{faker::company::en::CompanyName, Fake};
use storage::Database;

/// Address the test geocoder reports for every device position.
pub const DEVICE_ADDRESS: &str = "Model Town, Jalandhar, Punjab, India";

pub fn new_delhi() -> Coordinate {
    Coordinate::new(28.6139, 77.209).unwrap()
}

/// Test configuration with optional overrides (e.g. `("reports.completion_delay_ms", "50")`).
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::load_for_test(overrides).expect("Failed to build test config")
}

/// Geocoder that knows "New Delhi" and reverse geocodes to [`DEVICE_ADDRESS`].
pub fn test_geocoder() -> MockGeocoder {
    MockGeocoder::new()
        .with_place("New Delhi", "New Delhi, Delhi, India", new_delhi())
        .with_reverse_address(DEVICE_ADDRESS)
}

/// Application state over the sample data.
pub fn create_test_state(config: Config, geocoder: Arc<dyn Geocoder>) -> AppState {
    let map = initial_map_view(&config.map).expect("Invalid test map config");
    let db = Database::seeded(map).expect("Failed to seed test database");
    AppState::new(config, db, geocoder)
}

/// Application with default test config and the test geocoder.
pub fn create_test_app() -> Router {
    create_app(create_test_state(test_config(&[]), Arc::new(test_geocoder())))
}

/// Plausible donor name.
pub fn fake_donor() -> String {
    CompanyName().fake()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request without a body (status transitions, deletes).
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// Ids of the `items` of a list response, in order.
pub fn item_ids(json: &serde_json::Value) -> Vec<String> {
    json["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
