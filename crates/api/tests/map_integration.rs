//! Integration tests for the map search view.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::Router;
use common::{
    create_test_app, create_test_state, get_request, json_request, parse_response_body,
    test_config, DEVICE_ADDRESS,
};
use dashboard_api::app::create_app;
use domain::services::geocoding::{DisabledGeocoder, Geocoder, MockGeocoder};
use serde_json::json;
use tower::ServiceExt;

fn app_with(geocoder: Arc<dyn Geocoder>) -> Router {
    create_app(create_test_state(test_config(&[]), geocoder))
}

async fn current_view(app: &Router) -> serde_json::Value {
    parse_response_body(app.clone().oneshot(get_request("/api/v1/map")).await.unwrap()).await
}

#[tokio::test]
async fn test_initial_view_from_config() {
    let app = create_test_app();

    let view = current_view(&app).await;

    assert_eq!(view["center"]["lat"], 31.326);
    assert_eq!(view["center"]["lng"], 75.576);
    assert_eq!(view["radiusMeters"], 5000);
    assert_eq!(view["zoom"], 12);
    assert_eq!(view["markers"], json!([]));
    assert!(view["locationDetails"].is_null());
}

#[tokio::test]
async fn test_set_radius() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, "/api/v1/map/radius", json!({"radiusKm": 12})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["radiusMeters"], 12000);

    for km in [0, 21] {
        let rejected = app
            .clone()
            .oneshot(json_request(Method::PUT, "/api/v1/map/radius", json!({"radiusKm": km})))
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    }

    assert_eq!(current_view(&app).await["radiusMeters"], 12000);
}

#[tokio::test]
async fn test_locate_centers_on_device_position() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/map/locate",
            json!({"lat": 31.33, "lng": 75.58}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let details = parse_response_body(response).await;
    assert_eq!(details["address"], DEVICE_ADDRESS);
    assert_eq!(details["lat"], 31.33);

    let view = current_view(&app).await;
    assert_eq!(view["center"], json!({"lat": 31.33, "lng": 75.58}));
    assert_eq!(view["markers"], json!([{"lat": 31.33, "lng": 75.58}]));
    assert_eq!(view["locationDetails"]["address"], DEVICE_ADDRESS);
}

#[tokio::test]
async fn test_locate_with_failed_lookup_uses_placeholder_address() {
    let app = app_with(Arc::new(MockGeocoder::failing()));

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/map/locate",
            json!({"lat": 30.9, "lng": 75.85}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["address"], "Address not found");
}

#[tokio::test]
async fn test_locate_rejects_out_of_range_coordinate() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/map/locate",
            json!({"lat": 95.0, "lng": 75.0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = parse_response_body(response).await;
    assert_eq!(json["message"], "lat: Latitude must be between -90 and 90");
    assert_eq!(current_view(&app).await["center"]["lat"], 31.326);
}

#[tokio::test]
async fn test_search_moves_view_to_result() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/map/search", json!({"query": "new delhi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json["moved"], true);
    assert_eq!(json["view"]["center"], json!({"lat": 28.6139, "lng": 77.209}));
    assert_eq!(json["view"]["zoom"], 14);
    assert_eq!(json["view"]["markers"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_search_is_ignored() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/map/search", json!({"query": "   "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json["moved"], false);
    assert_eq!(json["view"], current_view(&app).await);
}

#[tokio::test]
async fn test_search_not_found_leaves_view_unchanged() {
    let app = create_test_app();
    let before = current_view(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/map/search", json!({"query": "Atlantis"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = parse_response_body(response).await;
    assert_eq!(json["message"], "Location not found. Please try another search.");
    assert_eq!(current_view(&app).await, before);
}

#[tokio::test]
async fn test_search_without_geocoder_is_unavailable() {
    let app = app_with(Arc::new(DisabledGeocoder));

    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/map/search", json!({"query": "New Delhi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(parse_response_body(response).await["error"], "service_unavailable");
}

#[tokio::test]
async fn test_search_with_failing_geocoder_is_bad_gateway() {
    let app = app_with(Arc::new(MockGeocoder::failing()));
    let before = current_view(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/v1/map/search", json!({"query": "New Delhi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(parse_response_body(response).await["error"], "bad_gateway");
    assert_eq!(current_view(&app).await, before);
}

#[tokio::test]
async fn test_set_radius_with_mistyped_body_is_rejected() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, "/api/v1/map/radius", json!({"radiusKm": "wide"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(response).await["error"], "validation_error");
    assert_eq!(current_view(&app).await["radiusMeters"], 5000);
}
