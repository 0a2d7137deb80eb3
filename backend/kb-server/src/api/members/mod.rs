pub mod members;
pub mod update_member_request;
