use crate::{Client, activity_query};

use kb_core::{ActivityFilter, ActivityType};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:3000/", None);
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:3000", None);
    assert_eq!(client.base_url, "http://localhost:3000");
}

#[test]
fn test_user_id_stored() {
    let client = Client::new("http://localhost:3000", Some("user-123"));
    assert_eq!(client.user_id, Some("user-123".to_string()));
}

#[test]
fn test_user_id_none() {
    let client = Client::new("http://localhost:3000", None);
    assert!(client.user_id.is_none());
}

#[test]
fn test_activity_query_empty_filter_has_no_pairs() {
    assert!(activity_query(&ActivityFilter::default()).is_empty());
}

#[test]
fn test_activity_query_uses_wire_names() {
    let filter = ActivityFilter {
        kind: Some(ActivityType::Card),
        read: Some(false),
        board_id: Some("board-1".to_string()),
    };

    let pairs = activity_query(&filter);

    assert_eq!(
        pairs,
        vec![
            ("type", "card".to_string()),
            ("read", "false".to_string()),
            ("boardId", "board-1".to_string()),
        ]
    );
}
