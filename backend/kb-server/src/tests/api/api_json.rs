use crate::ApiJson;
use crate::MoveCardRequest;

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode, header},
};

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_valid_body_is_extracted() {
    let request = json_request(r#"{"destinationColumnId":"column-2","index":1}"#);

    let ApiJson(body) = ApiJson::<MoveCardRequest>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(body.destination_column_id.as_deref(), Some("column-2"));
    assert_eq!(body.index, Some(1));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let request = json_request("{not json");

    let result = ApiJson::<MoveCardRequest>::from_request(request, &()).await;

    match result {
        Err(error) => assert_eq!(error.status(), StatusCode::BAD_REQUEST),
        Ok(_) => panic!("Expected rejection"),
    }
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .body(Body::from("{}"))
        .unwrap();

    let result = ApiJson::<MoveCardRequest>::from_request(request, &()).await;

    assert!(result.is_err());
}
