use crate::{CardPatch, Label, NewCard};

use googletest::prelude::*;

#[test]
fn given_card_input_with_legacy_shapes_when_deserialized_then_normalized() {
    let json = r##"{"title":"Write docs","labels":["#eb5a46"],"attachments":2}"##;

    let input: NewCard = serde_json::from_str(json).unwrap();
    let card = input.into_card("column-1");

    assert_that!(card.labels, elements_are![eq(&Label::from_color("#eb5a46"))]);
    assert_that!(card.attachments.count, eq(2));
    assert_that!(card.column_id, eq("column-1"));
}

#[test]
fn given_title_patch_when_applied_then_description_is_kept() {
    let mut card = NewCard {
        description: "details".to_string(),
        ..NewCard::titled("Old")
    }
    .into_card("column-1");

    CardPatch::retitled("New").apply_to(&mut card);

    assert_that!(card.title, eq("New"));
    assert_that!(card.description, eq("details"));
}
