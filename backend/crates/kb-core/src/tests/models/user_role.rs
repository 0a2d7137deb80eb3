use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_round_trips_through_str() {
    for role in [UserRole::Admin, UserRole::Editor, UserRole::Viewer] {
        assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_user_role_rejects_unknown() {
    let err = UserRole::from_str("owner").unwrap_err();
    assert!(err.to_string().contains("owner"));
}

#[test]
fn test_user_role_default_is_viewer() {
    assert_eq!(UserRole::default(), UserRole::Viewer);
}
