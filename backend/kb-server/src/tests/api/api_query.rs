use crate::ApiQuery;

use kb_core::{ActivityFilter, ActivityType};

use axum::{
    extract::FromRequestParts,
    http::{Request, StatusCode},
};

async fn extract(uri: &str) -> Result<ActivityFilter, crate::ApiError> {
    let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
    ApiQuery::<ActivityFilter>::from_request_parts(&mut parts, &())
        .await
        .map(|ApiQuery(filter)| filter)
}

#[tokio::test]
async fn test_valid_query_is_extracted() {
    let filter = extract("/api/activities?type=member&read=true&boardId=board-7")
        .await
        .unwrap();

    assert_eq!(filter.kind, Some(ActivityType::Member));
    assert_eq!(filter.read, Some(true));
    assert_eq!(filter.board_id.as_deref(), Some("board-7"));
}

#[tokio::test]
async fn test_empty_query_is_unfiltered() {
    let filter = extract("/api/activities").await.unwrap();

    assert_eq!(filter, ActivityFilter::default());
}

#[tokio::test]
async fn test_unknown_type_is_bad_request() {
    match extract("/api/activities?type=bogus").await {
        Err(error) => assert_eq!(error.status(), StatusCode::BAD_REQUEST),
        Ok(_) => panic!("Expected rejection"),
    }
}
