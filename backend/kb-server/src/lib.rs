pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    activities::{
        activities::{
            add_comment, get_activity, list_activities, mark_all_as_read, mark_as_read,
            toggle_like,
        },
        add_comment_request::AddCommentRequest,
        mark_all_read_response::MarkAllReadResponse,
    },
    boards::boards::{
        create_board, delete_board, get_board, list_board_activities, list_boards, update_board,
    },
    cards::{
        cards::{add_card, delete_card, get_card, list_cards, move_card, update_card},
        move_card_request::MoveCardRequest,
    },
    collections::collections::{
        add_board_to_collection, create_collection, delete_collection, get_collection,
        list_collection_boards, list_collections, remove_board_from_collection, update_collection,
    },
    columns::columns::{add_column, delete_column, list_columns, update_column},
    data_response::DataResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, api_query::ApiQuery, current_user::CurrentUser},
    members::{
        members::{add_member, list_members, remove_member, update_member},
        update_member_request::UpdateMemberRequest,
    },
    users::users::{create_user, delete_user, get_user, list_users, update_user},
};
pub use app_state::AppState;
pub use routes::build_router;
