mod activity_filter;
mod activity_type;
mod board;
mod counted_list;
mod label;
mod user;
mod user_role;
