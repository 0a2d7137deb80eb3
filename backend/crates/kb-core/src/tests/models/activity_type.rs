use crate::ActivityType;

use std::str::FromStr;

#[test]
fn test_activity_type_as_str() {
    assert_eq!(ActivityType::Card.as_str(), "card");
    assert_eq!(ActivityType::Board.as_str(), "board");
    assert_eq!(ActivityType::Comment.as_str(), "comment");
    assert_eq!(ActivityType::Member.as_str(), "member");
    assert_eq!(ActivityType::Other.as_str(), "other");
}

#[test]
fn test_activity_type_from_str() {
    assert_eq!(ActivityType::from_str("card").unwrap(), ActivityType::Card);
    assert_eq!(
        ActivityType::from_str("member").unwrap(),
        ActivityType::Member
    );
    assert!(ActivityType::from_str("Card").is_err());
    assert!(ActivityType::from_str("").is_err());
}

#[test]
fn test_activity_type_default() {
    assert_eq!(ActivityType::default(), ActivityType::Other);
}

#[test]
fn test_activity_type_serializes_lowercase() {
    let json = serde_json::to_string(&ActivityType::Comment).unwrap();
    assert_eq!(json, "\"comment\"");
}
