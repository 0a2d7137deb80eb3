use crate::{BoardPatch, NewBoard, NewCard, NewColumn};

use googletest::prelude::*;

#[test]
fn given_nested_input_when_materialized_then_back_references_are_set() {
    let board = NewBoard {
        columns: vec![NewColumn {
            name: "To Do".to_string(),
            cards: vec![NewCard::titled("X")],
        }],
        ..NewBoard::named("Sprint")
    }
    .into_board();

    let column = &board.columns[0];
    assert_that!(board.id, starts_with("board-"));
    assert_that!(column.id, starts_with("column-"));
    assert_that!(column.board_id, eq(&board.id));
    assert_that!(column.cards[0].column_id, eq(&column.id));
    assert_that!(column.cards[0].id, starts_with("card-"));
}

#[test]
fn given_empty_json_when_deserialized_then_defaults_apply() {
    let input: NewBoard = serde_json::from_str("{}").unwrap();

    assert_that!(input.name, eq(""));
    assert_that!(input.columns, is_empty());
    assert_that!(input.members.count, eq(0));
}

#[test]
fn given_patch_when_applied_then_only_set_fields_change() {
    let mut board = NewBoard {
        description: "old".to_string(),
        color: "blue".to_string(),
        ..NewBoard::named("Sprint")
    }
    .into_board();

    BoardPatch {
        name: Some("Sprint 2".to_string()),
        ..BoardPatch::default()
    }
    .apply_to(&mut board);

    assert_that!(board.name, eq("Sprint 2"));
    assert_that!(board.description, eq("old"));
    assert_that!(board.color, eq("blue"));
}
