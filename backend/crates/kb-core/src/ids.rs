//! Entity id generation.
//!
//! Ids are `<kind>-<uuid v7>`. The v7 layout carries the creation time in
//! its leading 48 bits, so ids sort by creation within a process.

use uuid::Uuid;

pub const BOARD_ID_PREFIX: &str = "board";
pub const COLUMN_ID_PREFIX: &str = "column";
pub const CARD_ID_PREFIX: &str = "card";
pub const COLLECTION_ID_PREFIX: &str = "collection";
pub const ACTIVITY_ID_PREFIX: &str = "activity";
pub const COMMENT_ID_PREFIX: &str = "comment";
pub const USER_ID_PREFIX: &str = "user";
pub const MEMBER_ID_PREFIX: &str = "member";

/// Generate a new time-ordered id with the given kind prefix.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::now_v7())
}
