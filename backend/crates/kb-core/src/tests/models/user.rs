use crate::{User, UserRole, UserSummary, initials_for};

use googletest::prelude::*;

#[test]
fn given_two_word_name_when_deriving_initials_then_first_and_last_letters() {
    assert_that!(initials_for("Ada Lovelace"), eq("AL"));
}

#[test]
fn given_three_word_name_when_deriving_initials_then_first_and_last_word() {
    assert_that!(initials_for("mary ann evans"), eq("ME"));
}

#[test]
fn given_single_word_when_deriving_initials_then_two_letters() {
    assert_that!(initials_for("alice"), eq("AL"));
}

#[test]
fn given_blank_name_when_deriving_initials_then_empty() {
    assert_that!(initials_for("   "), eq(""));
}

#[test]
fn given_user_when_summarized_then_id_is_carried() {
    let user = User {
        id: "user-1".to_string(),
        name: "Ada Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
        initials: "AL".to_string(),
        avatar: None,
        role: UserRole::Admin,
    };

    let summary = UserSummary::from(&user);

    assert_that!(summary.id, some(eq("user-1")));
    assert_that!(summary.name, eq("Ada Lovelace"));
    assert_that!(summary.initials, eq("AL"));
}
