//! Router behaviour when the database cannot be reached.

mod common;

use axum::http::StatusCode;
use labanita_back::routes::NOT_CONNECTED;
use serde_json::json;

use common::{offline_app, send, send_raw};

#[tokio::test]
async fn root_reports_missing_database() {
    let app = offline_app();

    let (status, body) = send_raw(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), NOT_CONNECTED);
}

#[tokio::test]
async fn liveness_does_not_touch_the_database() {
    let app = offline_app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn readiness_is_unavailable() {
    let app = offline_app();

    let (status, body) = send(&app, "GET", "/health/ready", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn listing_without_a_connection_is_a_server_error() {
    let app = offline_app();

    let (status, body) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to get products.");
    assert_eq!(body["error"], "database connection unavailable");

    let (status, body) = send(&app, "GET", "/categories", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to get categories.");
}

#[tokio::test]
async fn writes_without_a_connection_name_the_operation() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        "POST",
        "/categories",
        Some(json!({ "name": "Dairy", "description": "Milk products", "image_url": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to create category.");

    let (status, body) = send(&app, "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to delete product.");
}

#[tokio::test]
async fn missing_field_is_a_bad_request() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Milk", "description": "1L", "price": 2.5, "image_url": "y" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid request body.");
    assert!(body["error"].as_str().unwrap().contains("category_id"));
}

#[tokio::test]
async fn wrongly_typed_field_is_a_bad_request() {
    let app = offline_app();

    let (status, _) = send(
        &app,
        "PUT",
        "/categories/3",
        Some(json!({ "name": 5, "description": "Milk products", "image_url": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn body_without_json_content_type_is_a_bad_request() {
    let app = offline_app();

    let (status, _) = send_raw(&app, "POST", "/categories", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let app = offline_app();

    let (status, body) = send(&app, "GET", "/products/milk", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Resource not found." }));
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let app = offline_app();

    let (status, _) = send_raw(&app, "PATCH", "/products/1", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
