//! Integration tests for NGO partner endpoints.

mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use common::{
    create_test_app, empty_request, get_request, item_ids, json_request, parse_response_body,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_partners_filters() {
    let app = create_test_app();

    let all = parse_response_body(app.clone().oneshot(get_request("/api/v1/partners")).await.unwrap()).await;
    assert_eq!(item_ids(&all), vec!["1", "2", "3"]);
    assert_eq!(all["items"][0]["type"], "Food Bank");
    assert_eq!(all["items"][0]["contactPerson"], "Sarah Johnson");

    let active = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/partners?status=Active"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item_ids(&active), vec!["1", "2"]);

    let by_type = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/partners?type=International%20NGO"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item_ids(&by_type), vec!["3"]);

    // Search covers name, contact person and location
    let by_contact = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/partners?search=michael"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(item_ids(&by_contact), vec!["2"]);

    let by_location = parse_response_body(
        app.oneshot(get_request("/api/v1/partners?search=chicago&status=Active"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(by_location["total"], 0);
}

#[tokio::test]
async fn test_create_partner_starts_today_without_donations() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/partners",
            json!({
                "name": "Harvest Share",
                "type": "Food Bank",
                "contactPerson": "Priya Singh",
                "email": "priya@harvestshare.org",
                "phone": "+91 98765 43210",
                "location": "Jalandhar, PB",
                "status": "Active"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    let today = Utc::now().date_naive().to_string();
    assert_eq!(created["partnershipDate"], today.as_str());
    assert_eq!(created["lastInteraction"], today.as_str());
    assert_eq!(created["totalDonations"], 0);
    assert_eq!(created["status"], "Active");

    let list = parse_response_body(app.oneshot(get_request("/api/v1/partners")).await.unwrap()).await;
    let ids = item_ids(&list);
    assert_eq!(ids.len(), 4);
    assert_eq!(ids[3], created["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_create_partner_rejects_invalid_email() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/partners",
            json!({"name": "Harvest Share", "email": "not-an-email"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = parse_response_body(response).await;
    assert_eq!(json["message"], "email: Invalid email format");
}

#[tokio::test]
async fn test_create_partner_requires_name() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/partners",
            json!({"type": "Local NGO"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(response).await["error"], "validation_error");
}

#[tokio::test]
async fn test_update_partner_keeps_history_fields() {
    let app = create_test_app();

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/partners/3",
            json!({"status": "Active", "phone": "+1 (555) 999-0000"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = parse_response_body(response).await;
    assert_eq!(json["status"], "Active");
    assert_eq!(json["phone"], "+1 (555) 999-0000");
    assert_eq!(json["name"], "Global Hunger Relief");
    assert_eq!(json["partnershipDate"], "2024-02-10");
    assert_eq!(json["totalDonations"], 0);
}

#[tokio::test]
async fn test_partner_not_found_and_delete() {
    let app = create_test_app();

    let missing = app.clone().oneshot(get_request("/api/v1/partners/404")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let update_missing = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/api/v1/partners/404",
            json!({"status": "Inactive"}),
        ))
        .await
        .unwrap();
    assert_eq!(update_missing.status(), StatusCode::NOT_FOUND);

    let deleted = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/api/v1/partners/2"))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let list = parse_response_body(app.oneshot(get_request("/api/v1/partners")).await.unwrap()).await;
    assert_eq!(item_ids(&list), vec!["1", "3"]);
}

#[tokio::test]
async fn test_partner_stats_and_types() {
    let app = create_test_app();

    let stats = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/partners/stats"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(stats["totalPartners"], 3);
    assert_eq!(stats["activePartners"], 2);
    assert_eq!(stats["totalDonations"], 2300);
    assert_eq!(stats["partnerTypes"], 3);

    let types = parse_response_body(app.oneshot(get_request("/api/v1/partners/types")).await.unwrap()).await;
    assert_eq!(types, json!(["Food Bank", "Local NGO", "International NGO"]));
}
