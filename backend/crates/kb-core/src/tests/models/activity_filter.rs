use crate::{Activity, ActivityFilter, ActivityType, NewActivity, UserSummary};

use googletest::prelude::*;

fn activity(kind: ActivityType, read: bool, board_id: Option<&str>) -> Activity {
    let mut new = NewActivity::new(UserSummary::new("A", "A"), kind, "did something");
    new.board_id = board_id.map(str::to_string);
    let mut activity = new.into_activity();
    activity.read = read;
    activity
}

#[test]
fn given_default_filter_when_applied_then_everything_matches() {
    let activities = vec![
        activity(ActivityType::Card, false, None),
        activity(ActivityType::Member, true, Some("board-1")),
    ];

    let result = ActivityFilter::default().apply(activities.clone());

    assert_that!(result, eq(&activities));
}

#[test]
fn given_combined_filter_when_applied_then_all_conditions_hold() {
    let activities = vec![
        activity(ActivityType::Card, false, Some("board-1")),
        activity(ActivityType::Card, true, Some("board-1")),
        activity(ActivityType::Card, false, Some("board-2")),
        activity(ActivityType::Board, false, Some("board-1")),
    ];
    let filter = ActivityFilter {
        kind: Some(ActivityType::Card),
        read: Some(false),
        board_id: Some("board-1".to_string()),
    };

    let result = filter.apply(activities.clone());

    assert_that!(result, elements_are![eq(&activities[0])]);
}

#[test]
fn given_query_json_when_deserialized_then_type_key_maps_to_kind() {
    let filter: ActivityFilter =
        serde_json::from_str(r#"{"type":"comment","boardId":"board-9"}"#).unwrap();

    assert_that!(filter.kind, some(eq(ActivityType::Comment)));
    assert_that!(filter.board_id, some(eq("board-9")));
    assert_that!(filter.read, none());
}
