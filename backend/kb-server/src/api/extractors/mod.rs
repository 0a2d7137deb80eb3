pub mod api_json;
pub mod api_query;
pub mod current_user;
