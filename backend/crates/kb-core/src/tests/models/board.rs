use crate::{NewBoard, NewCard, NewColumn};

use googletest::prelude::*;

#[test]
fn given_board_with_cards_when_recounting_then_total_tasks_matches() {
    let mut board = NewBoard {
        columns: vec![
            NewColumn {
                name: "To Do".to_string(),
                cards: vec![NewCard::titled("X"), NewCard::titled("Y")],
            },
            NewColumn::named("Doing"),
        ],
        ..NewBoard::named("Sprint")
    }
    .into_board();

    assert_that!(board.total_tasks, eq(2));

    board.columns[0].cards.pop();
    board.touch();

    assert_that!(board.total_tasks, eq(1));
}

#[test]
fn given_board_when_looking_up_columns_then_found_by_id() {
    let board = NewBoard {
        columns: vec![NewColumn::named("To Do"), NewColumn::named("Done")],
        ..NewBoard::named("Sprint")
    }
    .into_board();
    let done_id = board.columns[1].id.clone();

    assert_that!(board.column(&done_id).map(|c| c.name.as_str()), some(eq("Done")));
    assert_that!(board.column("column-missing"), none());
}

#[test]
fn given_board_when_serialized_then_wire_fields_are_camel_case() {
    let board = NewBoard::named("Sprint").into_board();

    let json = serde_json::to_value(&board).unwrap();

    assert_that!(json.get("totalTasks"), some(anything()));
    assert_that!(json.get("createdAt"), some(anything()));
    assert_that!(json.get("collectionId"), none());
}
