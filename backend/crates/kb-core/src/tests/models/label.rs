use crate::{Card, Label};

use googletest::prelude::*;

#[test]
fn given_bare_color_when_deserialized_then_color_becomes_id() {
    let label: Label = serde_json::from_str("\"#61bd4f\"").unwrap();

    assert_that!(label.id, eq("#61bd4f"));
    assert_that!(label.name, none());
    assert_that!(label.color, eq("#61bd4f"));
}

#[test]
fn given_rich_label_when_deserialized_then_fields_are_kept() {
    let label: Label =
        serde_json::from_str(r#"{"id":"l1","name":"Bug","color":"red"}"#).unwrap();

    assert_that!(label, eq(&Label::named("l1", "Bug", "red")));
}

#[test]
fn given_rich_label_without_id_when_deserialized_then_color_becomes_id() {
    let label: Label = serde_json::from_str(r#"{"name":"Bug","color":"red"}"#).unwrap();

    assert_that!(label.id, eq("red"));
    assert_that!(label.name, some(eq("Bug")));
}

#[test]
fn given_card_with_mixed_labels_when_deserialized_then_all_are_normalized() {
    let json = r#"{
        "id": "card-1",
        "title": "Fix login",
        "labels": ["blue", {"id": "l2", "name": "Urgent", "color": "red"}],
        "columnId": "column-1"
    }"#;

    let card: Card = serde_json::from_str(json).unwrap();

    assert_that!(card.labels.len(), eq(2));
    assert_that!(card.labels[0], eq(&Label::from_color("blue")));
    assert_that!(card.labels[1].name, some(eq("Urgent")));
}

#[test]
fn given_normalized_label_when_serialized_then_object_form_is_written() {
    let json = serde_json::to_value(Label::from_color("green")).unwrap();

    assert_that!(
        json,
        eq(&serde_json::json!({"id": "green", "name": null, "color": "green"}))
    );
}
