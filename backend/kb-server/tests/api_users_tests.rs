//! Integration tests for user API handlers and health probes
mod common;

use crate::common::{create_test_app, delete, get, json, send};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_derives_initials() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        json("POST", "/api/users", json!({ "name": "David Pham", "email": "david@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["initials"], "DP");
    assert_eq!(body["data"]["role"], "viewer");
}

#[tokio::test]
async fn test_duplicate_email_is_validation_error() {
    let app = create_test_app();
    let user = json!({ "name": "David Pham", "email": "david@example.com" });
    send(&app, json("POST", "/api/users", user.clone())).await;

    let (status, body) = send(&app, json("POST", "/api/users", user)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn test_user_update_and_delete() {
    let app = create_test_app();
    let (_, created) = send(
        &app,
        json("POST", "/api/users", json!({ "name": "Emma Hoang" })),
    )
    .await;
    let uri = format!("/api/users/{}", created["data"]["id"].as_str().unwrap());

    let (status, body) = send(&app, json("PATCH", &uri, json!({ "role": "editor" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "editor");

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (_, users) = send(&app, get("/api/users")).await;
    assert_eq!(users["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["components"]["store"]["boards"], 0);
}

#[tokio::test]
async fn test_live_and_ready_probes() {
    let app = create_test_app();

    let (live, _) = send(&app, get("/live")).await;
    let (ready, _) = send(&app, get("/ready")).await;

    assert_eq!(live, StatusCode::OK);
    assert_eq!(ready, StatusCode::OK);
}
