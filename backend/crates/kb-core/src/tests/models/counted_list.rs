use crate::{Attachment, Board, CountedList};

use googletest::prelude::*;

fn attachment(id: &str) -> Attachment {
    Attachment {
        id: id.to_string(),
        name: format!("{id}.pdf"),
        url: String::new(),
        date: String::new(),
    }
}

#[test]
fn given_bare_count_when_deserialized_then_items_are_empty() {
    let list: CountedList<Attachment> = serde_json::from_str("3").unwrap();

    assert_that!(list.count, eq(3));
    assert_that!(list.items, is_empty());
}

#[test]
fn given_item_list_when_deserialized_then_count_is_length() {
    let json = r#"[{"id":"a1","name":"spec.pdf"},{"id":"a2","name":"logo.png"}]"#;

    let list: CountedList<Attachment> = serde_json::from_str(json).unwrap();

    assert_that!(list.count, eq(2));
    assert_that!(list.items.len(), eq(2));
}

#[test]
fn given_object_with_low_count_when_deserialized_then_count_is_raised() {
    let json = r#"{"count":0,"items":[{"id":"a1","name":"spec.pdf"}]}"#;

    let list: CountedList<Attachment> = serde_json::from_str(json).unwrap();

    assert_that!(list.count, eq(1));
}

#[test]
fn given_list_when_pushing_and_removing_then_count_tracks_changes() {
    let mut list = CountedList::from_count(2);
    list.push(attachment("a1"));
    assert_that!(list.count, eq(3));

    let removed = list.remove_first(|a| a.id == "a1");
    assert_that!(removed.map(|a| a.id), some(eq("a1")));
    assert_that!(list.count, eq(2));

    assert_that!(list.remove_first(|a| a.id == "missing"), none());
    assert_that!(list.count, eq(2));
}

#[test]
fn given_legacy_board_when_deserialized_then_member_count_is_normalized() {
    let json = r#"{
        "id": "board-1",
        "name": "Roadmap",
        "members": 5,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;

    let board: Board = serde_json::from_str(json).unwrap();

    assert_that!(board.members.count, eq(5));
    assert_that!(board.members.items, is_empty());
    assert_that!(board.columns, is_empty());
}
