use crate::ApiError;

use kb_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let error = ApiError::NotFound {
        message: "Card not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Card not found");
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title is required".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "title");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("Invalid request data")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid request data");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Store operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[test]
fn test_service_not_found_converts_to_not_found() {
    let api_error: ApiError = ServiceError::not_found("Board not found").into();

    assert_eq!(api_error.status(), StatusCode::NOT_FOUND);
    match api_error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Board not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_service_validation_keeps_field() {
    let api_error: ApiError = ServiceError::validation("name is required", Some("name")).into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_service_unexpected_converts_to_internal() {
    let api_error: ApiError = ServiceError::unexpected("Store operation failed").into();

    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
