//! Integration tests for inventory endpoints.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, create_test_state, empty_request, get_request, item_ids, json_request,
    parse_response_body, test_config, test_geocoder,
};
use dashboard_api::app::create_app;
use serde_json::json;
use tower::ServiceExt;

async fn add_stock(app: &axum::Router, id: &str) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(empty_request(
            Method::POST,
            &format!("/api/v1/inventory/{}/add-stock", id),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    parse_response_body(response).await
}

#[tokio::test]
async fn test_list_items_with_derived_status() {
    let app = create_test_app();

    let response = app.oneshot(get_request("/api/v1/inventory")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(item_ids(&json), vec!["1", "2", "3"]);
    assert_eq!(json["items"][0]["status"], "In Stock");
    assert_eq!(json["items"][1]["status"], "Low Stock");
    assert_eq!(json["items"][2]["status"], "Out of Stock");
    assert_eq!(json["items"][1]["minStock"], 30);
}

#[tokio::test]
async fn test_list_items_filter_by_category_and_status() {
    let app = create_test_app();

    let grains = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/inventory?category=Grains"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item_ids(&grains), vec!["1", "3"]);

    let low = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/inventory?status=Low%20Stock"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item_ids(&low), vec!["2"]);

    let search = parse_response_body(
        app.oneshot(get_request("/api/v1/inventory?category=Grains&search=pas"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item_ids(&search), vec!["3"]);
}

#[tokio::test]
async fn test_add_stock_recomputes_status() {
    let app = create_test_app();

    let first = add_stock(&app, "2").await;
    assert_eq!(first["quantity"], 25);
    assert_eq!(first["status"], "Low Stock");

    let second = add_stock(&app, "2").await;
    assert_eq!(second["quantity"], 35);
    assert_eq!(second["status"], "In Stock");
}

#[tokio::test]
async fn test_add_stock_out_of_stock_item() {
    let app = create_test_app();

    let item = add_stock(&app, "3").await;

    assert_eq!(item["quantity"], 10);
    assert_eq!(item["status"], "In Stock");
}

#[tokio::test]
async fn test_add_stock_with_explicit_amount() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/inventory/2/add-stock",
            json!({"amount": 3}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json["quantity"], 18);
    assert_eq!(json["status"], "Low Stock");
}

#[tokio::test]
async fn test_add_stock_with_invalid_amount_leaves_quantity_unchanged() {
    let app = create_test_app();

    for body in [json!({"amount": -5}), json!({"amount": "ten"}), json!({"amount": 0})] {
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/v1/inventory/2/add-stock", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_response_body(response).await["error"], "validation_error");
    }

    let item = parse_response_body(app.oneshot(get_request("/api/v1/inventory/2")).await.unwrap()).await;
    assert_eq!(item["quantity"], 15);
}

#[tokio::test]
async fn test_add_stock_uses_configured_increment() {
    let config = test_config(&[("inventory.restock_increment", "50")]);
    let app = create_app(create_test_state(config, Arc::new(test_geocoder())));

    let item = add_stock(&app, "3").await;

    assert_eq!(item["quantity"], 50);
}

#[tokio::test]
async fn test_add_stock_missing_item_returns_404() {
    let app = create_test_app();

    let response = app
        .oneshot(empty_request(Method::POST, "/api/v1/inventory/77/add-stock"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_item_derives_status_and_ignores_client_status() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/inventory",
            json!({
                "name": "Lentils",
                "category": "Grains",
                "quantity": 5,
                "unit": "kg",
                "minStock": 8,
                "location": "Storage C",
                "status": "In Stock"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    assert_eq!(created["status"], "Low Stock");

    let list = parse_response_body(app.oneshot(get_request("/api/v1/inventory")).await.unwrap()).await;
    let ids = item_ids(&list);
    assert_eq!(ids.len(), 4);
    assert_eq!(ids[3], created["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_create_item_without_category_is_rejected() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/inventory",
            json!({"name": "Lentils", "quantity": 5}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_item_rederives_status() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/inventory/1",
            json!({"quantity": 0}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json["quantity"], 0);
    assert_eq!(json["status"], "Out of Stock");
    assert_eq!(json["name"], "Rice");
}

#[tokio::test]
async fn test_update_item_can_clear_expiry_date() {
    let app = create_test_app();

    let untouched = app
        .clone()
        .oneshot(json_request(Method::PUT, "/api/v1/inventory/1", json!({"location": "Storage B"})))
        .await
        .unwrap();
    assert_eq!(parse_response_body(untouched).await["expiryDate"], "2024-12-31");

    let cleared = app
        .clone()
        .oneshot(json_request(Method::PUT, "/api/v1/inventory/1", json!({"expiryDate": null})))
        .await
        .unwrap();
    assert_eq!(cleared.status(), StatusCode::OK);
    let json = parse_response_body(cleared).await;
    assert!(json["expiryDate"].is_null());
    assert_eq!(json["location"], "Storage B");
}

#[tokio::test]
async fn test_delete_item_then_get_returns_404() {
    let app = create_test_app();

    let deleted = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/v1/inventory/2"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app.oneshot(get_request("/api/v1/inventory/2")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inventory_stats_and_categories() {
    let app = create_test_app();

    let stats = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/inventory/stats"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(stats["totalItems"], 3);
    assert_eq!(stats["lowStockItems"], 1);
    assert_eq!(stats["outOfStockItems"], 1);
    assert_eq!(stats["categories"], 2);

    let categories = parse_response_body(
        app.oneshot(get_request("/api/v1/inventory/categories"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(categories, json!(["Grains", "Canned Goods"]));
}
