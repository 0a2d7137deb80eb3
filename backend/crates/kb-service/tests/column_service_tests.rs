mod common;

use common::TestContext;

use kb_core::{ColumnPatch, NewColumn};

use googletest::prelude::*;

#[tokio::test]
async fn given_two_column_board_when_done_column_added_then_three_columns_and_one_activity() {
    // Given
    let ctx = TestContext::new();
    let board = ctx.board().await;

    // When
    let column = ctx
        .services
        .columns
        .add_column(&ctx.actor, &board.id, NewColumn::named("Done"))
        .await
        .unwrap();

    // Then
    let stored = ctx.reload(&board).await;
    assert_that!(stored.columns, len(eq(3)));
    assert_that!(stored.columns[2].name, eq("Done"));
    assert_that!(stored.columns[2].cards, is_empty());
    assert_that!(column.board_id, eq(&board.id));

    let activities = ctx.activities().await;
    assert_that!(activities, len(eq(1)));
    assert_that!(activities[0].column_name, some(eq("Done")));
    assert_that!(activities[0].board_name, some(eq("Sprint Board")));
}

#[tokio::test]
async fn given_new_column_with_cards_when_added_then_cards_are_dropped() {
    let ctx = TestContext::new();
    let board = ctx.board().await;
    let input = NewColumn {
        name: "Done".to_string(),
        cards: vec![kb_core::NewCard::titled("Sneaky")],
    };

    let column = ctx
        .services
        .columns
        .add_column(&ctx.actor, &board.id, input)
        .await
        .unwrap();

    assert_that!(column.cards, is_empty());
}

#[tokio::test]
async fn given_missing_board_when_column_added_then_not_found() {
    let ctx = TestContext::new();

    let err = ctx
        .services
        .columns
        .add_column(&ctx.actor, "board-missing", NewColumn::named("Done"))
        .await
        .unwrap_err();

    assert_that!(err.status_code(), eq(404));
    assert_that!(ctx.activities().await, is_empty());
}

#[tokio::test]
async fn given_column_when_updated_with_same_name_then_no_activity() {
    // Given
    let ctx = TestContext::new();
    let board = ctx.board().await;
    let column_id = board.columns[0].id.clone();

    // When
    ctx.services
        .columns
        .update_column(
            &ctx.actor,
            &board.id,
            &column_id,
            ColumnPatch::renamed("To Do"),
        )
        .await
        .unwrap();

    // Then
    assert_that!(ctx.activities().await, is_empty());
}

#[tokio::test]
async fn given_column_when_renamed_then_exactly_one_rename_activity() {
    // Given
    let ctx = TestContext::new();
    let board = ctx.board().await;
    let column_id = board.columns[0].id.clone();

    // When
    let renamed = ctx
        .services
        .columns
        .update_column(
            &ctx.actor,
            &board.id,
            &column_id,
            ColumnPatch::renamed("Backlog"),
        )
        .await
        .unwrap();

    // Then
    assert_that!(renamed.name, eq("Backlog"));
    let activities = ctx.activities().await;
    assert_that!(activities, len(eq(1)));
    assert_that!(activities[0].before, some(eq("To Do")));
    assert_that!(activities[0].after, some(eq("Backlog")));
}

#[tokio::test]
async fn given_missing_column_when_updated_then_not_found() {
    let ctx = TestContext::new();
    let board = ctx.board().await;

    let err = ctx
        .services
        .columns
        .update_column(
            &ctx.actor,
            &board.id,
            "column-missing",
            ColumnPatch::renamed("Backlog"),
        )
        .await
        .unwrap_err();

    assert_that!(err.message(), eq("Column not found"));
}

#[tokio::test]
async fn given_column_with_cards_when_deleted_then_cards_are_gone() {
    // Given
    let ctx = TestContext::new();
    let board = ctx.board().await;
    let to_do = board.columns[0].clone();

    // When
    ctx.services
        .columns
        .delete_column(&ctx.actor, &board.id, &to_do.id)
        .await
        .unwrap();

    // Then
    let stored = ctx.reload(&board).await;
    assert_that!(stored.columns, len(eq(1)));
    assert_that!(stored.total_tasks, eq(0));
    for card in &to_do.cards {
        assert_that!(
            stored.columns.iter().any(|c| c.card(&card.id).is_some()),
            eq(false)
        );
    }
    assert_that!(ctx.activities().await, len(eq(1)));
}
