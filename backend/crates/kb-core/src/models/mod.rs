pub mod activity;
pub mod activity_filter;
pub mod activity_type;
pub mod attachment;
pub mod board;
pub mod board_member;
pub mod card;
pub mod collection;
pub mod column;
pub mod comment;
pub mod counted_list;
pub mod label;
pub mod user;
pub mod user_role;
pub mod user_summary;
