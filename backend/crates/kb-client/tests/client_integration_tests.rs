//! Integration tests for the HTTP client using a wiremock mock server

mod common;

use common::{TestServer, activity, data, error_body, sample_board};

use kb_client::{ClientError, KanbanApi, USER_ID_HEADER};
use kb_core::{ActivityFilter, ActivityType, NewBoard, UserRole};

use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path, query_param},
};

#[tokio::test]
async fn test_list_boards_success() {
    let ctx = TestServer::start().await;
    let board = sample_board();

    Mock::given(method("GET"))
        .and(path("/api/boards"))
        .and(header(USER_ID_HEADER, "user-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&vec![board.clone()])))
        .mount(&ctx.server)
        .await;

    let boards = ctx.client.list_boards().await.unwrap();

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0], board);
}

#[tokio::test]
async fn test_get_board_not_found() {
    let ctx = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/boards/board-missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(error_body("Board not found", "NOT_FOUND")),
        )
        .mount(&ctx.server)
        .await;

    let err = ctx.client.get_board("board-missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "Board not found");
    assert!(err.to_string().contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_create_board_posts_body() {
    let ctx = TestServer::start().await;
    let board = sample_board();

    Mock::given(method("POST"))
        .and(path("/api/boards"))
        .and(body_string_contains("Sprint Board"))
        .respond_with(ResponseTemplate::new(201).set_body_json(data(&board)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let created = ctx
        .client
        .create_board(&NewBoard::named("Sprint Board"))
        .await
        .unwrap();

    assert_eq!(created.id, board.id);
}

#[tokio::test]
async fn test_validation_error_keeps_code() {
    let ctx = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/boards"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(error_body("name is required", "VALIDATION_ERROR")),
        )
        .mount(&ctx.server)
        .await;

    let err = ctx
        .client
        .create_board(&NewBoard::named(""))
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "VALIDATION_ERROR");
            assert_eq!(message, "name is required");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_json_body() {
    let ctx = TestServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/boards"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&ctx.server)
        .await;

    let err = ctx.client.list_boards().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("UNKNOWN"));
}

#[tokio::test]
async fn test_move_card_sends_destination_and_index() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let (todo, doing) = (&board.columns[0], &board.columns[1]);
    let mut moved = todo.cards[0].clone();
    moved.column_id = doing.id.clone();

    Mock::given(method("POST"))
        .and(path(format!(
            "/api/boards/{}/columns/{}/cards/{}/move",
            board.id, todo.id, moved.id
        )))
        .and(body_json(json!({ "destinationColumnId": doing.id, "index": 0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&moved)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let card = ctx
        .client
        .move_card(&board.id, &todo.id, &moved.id, &doing.id, Some(0))
        .await
        .unwrap();

    assert_eq!(card.column_id, doing.id);
}

#[tokio::test]
async fn test_move_card_without_index_omits_it() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let (todo, doing) = (&board.columns[0], &board.columns[1]);
    let card = todo.cards[0].clone();

    Mock::given(method("POST"))
        .and(path(format!(
            "/api/boards/{}/columns/{}/cards/{}/move",
            board.id, todo.id, card.id
        )))
        .and(body_json(json!({ "destinationColumnId": doing.id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&card)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.client
        .move_card(&board.id, &todo.id, &card.id, &doing.id, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_member_sends_email_and_role() {
    let ctx = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/boards/board-1/members"))
        .and(body_json(json!({ "email": "sam@example.com", "role": "editor" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": "member-1",
                "name": "sam",
                "initials": "SA",
                "email": "sam@example.com",
                "role": "editor"
            }
        })))
        .mount(&ctx.server)
        .await;

    let member = ctx
        .client
        .add_member("board-1", "sam@example.com", Some(UserRole::Editor))
        .await
        .unwrap();

    assert_eq!(member.role, UserRole::Editor);
    assert_eq!(member.initials, "SA");
}

#[tokio::test]
async fn test_list_activities_sends_filter_as_query() {
    let ctx = TestServer::start().await;
    let entry = activity(ActivityType::Card, "board-1", 1);

    Mock::given(method("GET"))
        .and(path("/api/activities"))
        .and(query_param("type", "card"))
        .and(query_param("read", "false"))
        .and(query_param("boardId", "board-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&vec![entry.clone()])))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let filter = ActivityFilter {
        kind: Some(ActivityType::Card),
        read: Some(false),
        board_id: Some("board-1".to_string()),
    };
    let activities = ctx.client.list_activities(&filter).await.unwrap();

    assert_eq!(activities, vec![entry]);
}

#[tokio::test]
async fn test_mark_all_as_read_returns_count() {
    let ctx = TestServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/activities/read-all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "updated": 3 } })))
        .mount(&ctx.server)
        .await;

    assert_eq!(ctx.client.mark_all_as_read().await.unwrap(), 3);
}

#[tokio::test]
async fn test_add_comment_posts_text() {
    let ctx = TestServer::start().await;
    let entry = activity(ActivityType::Board, "board-1", 0);

    Mock::given(method("POST"))
        .and(path(format!("/api/activities/{}/comments", entry.id)))
        .and(body_json(json!({ "text": "Nice work" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(data(&entry)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let result = ctx.client.add_comment(&entry.id, "Nice work").await.unwrap();

    assert_eq!(result.id, entry.id);
}

#[tokio::test]
async fn test_add_board_to_collection_posts_without_body() {
    let ctx = TestServer::start().await;
    let mut board = sample_board();
    board.collection_id = Some("collection-1".to_string());

    Mock::given(method("POST"))
        .and(path(format!("/api/collections/collection-1/boards/{}", board.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&board)))
        .mount(&ctx.server)
        .await;

    let result = ctx
        .client
        .add_board_to_collection("collection-1", &board.id)
        .await
        .unwrap();

    assert_eq!(result.collection_id.as_deref(), Some("collection-1"));
}
