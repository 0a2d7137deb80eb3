mod common;

use common::{TestServer, data, error_body, sample_board, titles};

use kb_client::{BoardDetail, DragLocation, DragResult, DragState, ReconcilePolicy};
use kb_core::{Board, NewColumn};

use googletest::prelude::*;
use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, method, path, path_regex},
};

async fn loaded(ctx: &TestServer, board: &Board, policy: ReconcilePolicy) -> BoardDetail {
    Mock::given(method("GET"))
        .and(path(format!("/api/boards/{}", board.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(board)))
        .mount(&ctx.server)
        .await;

    let mut detail = BoardDetail::new(ctx.api(), board.id.clone()).with_policy(policy);
    detail.load().await.unwrap();
    detail
}

fn drag_x_to_doing(board: &Board) -> DragResult {
    DragResult::new(
        board.columns[0].cards[0].id.clone(),
        DragLocation::new(board.columns[0].id.clone(), 0),
        Some(DragLocation::new(board.columns[1].id.clone(), 0)),
    )
}

fn move_path(board: &Board) -> String {
    format!(
        "/api/boards/{}/columns/{}/cards/{}/move",
        board.id, board.columns[0].id, board.columns[0].cards[0].id
    )
}

#[tokio::test]
async fn given_missing_board_when_loading_then_error_is_kept() {
    let ctx = TestServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/boards/board-missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(error_body("Board not found", "NOT_FOUND")),
        )
        .mount(&ctx.server)
        .await;

    let mut detail = BoardDetail::new(ctx.api(), "board-missing");
    let result = detail.load().await;

    assert_that!(result.is_err(), eq(true));
    assert_that!(detail.board(), none());
    assert_that!(detail.error(), some(eq("Board not found")));
}

#[tokio::test]
async fn given_board_when_drag_confirmed_then_board_stays_reordered() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::default()).await;

    let mut moved = board.columns[0].cards[0].clone();
    moved.column_id = board.columns[1].id.clone();
    Mock::given(method("POST"))
        .and(path(move_path(&board)))
        .and(body_json(
            json!({ "destinationColumnId": board.columns[1].id, "index": 0 }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&moved)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    detail.drag_start(moved.id.clone());
    assert_that!(detail.is_dragging(), eq(true));

    let card = detail.drag_end(&drag_x_to_doing(&board)).await.unwrap();

    assert_that!(card.map(|c| c.id), some(eq(&moved.id)));
    let current = detail.board().unwrap();
    assert_that!(titles(current, 0), elements_are![eq("Y")]);
    assert_that!(titles(current, 1), elements_are![eq("X")]);
    assert_that!(detail.drag_state(), eq(&DragState::Idle));
}

#[tokio::test]
async fn given_revert_policy_when_move_fails_then_board_is_restored() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::RevertOnFailure).await;

    Mock::given(method("POST"))
        .and(path(move_path(&board)))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(error_body("Card not found", "NOT_FOUND")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    detail.drag_start(board.columns[0].cards[0].id.clone());
    let result = detail.drag_end(&drag_x_to_doing(&board)).await;

    assert_that!(result.is_err(), eq(true));
    assert_that!(detail.board(), some(eq(&board)));
    assert_that!(detail.error(), some(eq("Card not found")));
    assert_that!(detail.is_dragging(), eq(false));
}

#[tokio::test]
async fn given_keep_policy_when_move_fails_then_optimistic_order_remains() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::KeepOptimistic).await;

    Mock::given(method("POST"))
        .and(path(move_path(&board)))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body(
            "An unexpected error occurred",
            "INTERNAL_ERROR",
        )))
        .mount(&ctx.server)
        .await;

    let result = detail.drag_end(&drag_x_to_doing(&board)).await;

    assert_that!(result.is_err(), eq(true));
    let current = detail.board().unwrap();
    assert_that!(titles(current, 0), elements_are![eq("Y")]);
    assert_that!(titles(current, 1), elements_are![eq("X")]);
}

#[tokio::test]
async fn given_drop_outside_columns_when_drag_ends_then_no_request_is_sent() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::default()).await;

    Mock::given(method("POST"))
        .and(path_regex(r"/move$"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let mut drag = drag_x_to_doing(&board);
    drag.destination = None;
    detail.drag_start(drag.card_id.clone());

    let result = detail.drag_end(&drag).await.unwrap();

    assert_that!(result, none());
    assert_that!(detail.board(), some(eq(&board)));
    assert_that!(detail.is_dragging(), eq(false));
}

#[tokio::test]
async fn given_rejected_column_when_adding_then_local_board_is_unchanged() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::default()).await;

    Mock::given(method("POST"))
        .and(path(format!("/api/boards/{}/columns", board.id)))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            "name is required",
            "VALIDATION_ERROR",
        )))
        .mount(&ctx.server)
        .await;

    let result = detail.add_column(&NewColumn::named("")).await;

    assert_that!(result.is_err(), eq(true));
    assert_that!(detail.board().map(|b| b.columns.len()), some(eq(2)));
}

#[tokio::test]
async fn given_new_column_when_added_then_it_is_appended() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::default()).await;

    let done = NewColumn::named("Done").into_column(&board.id);
    Mock::given(method("POST"))
        .and(path(format!("/api/boards/{}/columns", board.id)))
        .respond_with(ResponseTemplate::new(201).set_body_json(data(&done)))
        .mount(&ctx.server)
        .await;

    detail.add_column(&NewColumn::named("Done")).await.unwrap();

    let current = detail.board().unwrap();
    assert_that!(current.columns.len(), eq(3));
    assert_that!(current.columns[2].name, eq("Done"));
    assert_that!(current.columns[2].cards, is_empty());
}

#[tokio::test]
async fn given_card_when_deleted_then_it_leaves_its_column() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::default()).await;
    let card = board.columns[0].cards[0].clone();

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/api/boards/{}/columns/{}/cards/{}",
            board.id, board.columns[0].id, card.id
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&card)))
        .mount(&ctx.server)
        .await;

    detail
        .delete_card(&board.columns[0].id, &card.id)
        .await
        .unwrap();

    let current = detail.board().unwrap();
    assert_that!(titles(current, 0), elements_are![eq("Y")]);
    assert_that!(current.total_tasks, eq(1));
}

#[tokio::test]
async fn given_move_without_index_when_confirmed_then_card_is_appended() {
    let ctx = TestServer::start().await;
    let board = sample_board();
    let mut detail = loaded(&ctx, &board, ReconcilePolicy::default()).await;

    let mut moved = board.columns[0].cards[0].clone();
    moved.column_id = board.columns[1].id.clone();
    Mock::given(method("POST"))
        .and(path(move_path(&board)))
        .respond_with(ResponseTemplate::new(200).set_body_json(data(&moved)))
        .mount(&ctx.server)
        .await;

    detail
        .move_card(&board.columns[0].id, &board.columns[1].id, &moved.id, None)
        .await
        .unwrap();

    let current = detail.board().unwrap();
    assert_that!(titles(current, 0), elements_are![eq("Y")]);
    assert_that!(titles(current, 1), elements_are![eq("X")]);
    assert_that!(current.total_tasks, eq(2));
}
