mod api_json;
mod api_query;
mod error;
