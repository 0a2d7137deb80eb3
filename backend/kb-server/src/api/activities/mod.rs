pub mod activities;
pub mod add_comment_request;
pub mod mark_all_read_response;
