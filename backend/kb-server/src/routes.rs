use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Boards
        .route("/api/boards", get(crate::list_boards).post(crate::create_board))
        .route(
            "/api/boards/{id}",
            get(crate::get_board)
                .patch(crate::update_board)
                .delete(crate::delete_board),
        )
        .route("/api/boards/{id}/activities", get(crate::list_board_activities))
        // Columns
        .route(
            "/api/boards/{id}/columns",
            get(crate::list_columns).post(crate::add_column),
        )
        .route(
            "/api/boards/{id}/columns/{column_id}",
            axum::routing::patch(crate::update_column).delete(crate::delete_column),
        )
        // Cards
        .route(
            "/api/boards/{id}/columns/{column_id}/cards",
            get(crate::list_cards).post(crate::add_card),
        )
        .route(
            "/api/boards/{id}/columns/{column_id}/cards/{card_id}",
            get(crate::get_card)
                .patch(crate::update_card)
                .delete(crate::delete_card),
        )
        .route(
            "/api/boards/{id}/columns/{column_id}/cards/{card_id}/move",
            post(crate::move_card),
        )
        // Members
        .route(
            "/api/boards/{id}/members",
            get(crate::list_members).post(crate::add_member),
        )
        .route(
            "/api/boards/{id}/members/{member_id}",
            axum::routing::patch(crate::update_member).delete(crate::remove_member),
        )
        // Collections
        .route(
            "/api/collections",
            get(crate::list_collections).post(crate::create_collection),
        )
        .route(
            "/api/collections/{id}",
            get(crate::get_collection)
                .patch(crate::update_collection)
                .delete(crate::delete_collection),
        )
        .route(
            "/api/collections/{id}/boards",
            get(crate::list_collection_boards),
        )
        .route(
            "/api/collections/{id}/boards/{board_id}",
            post(crate::add_board_to_collection).delete(crate::remove_board_from_collection),
        )
        // Activity feed
        .route("/api/activities", get(crate::list_activities))
        .route("/api/activities/read-all", post(crate::mark_all_as_read))
        .route("/api/activities/{id}", get(crate::get_activity))
        .route("/api/activities/{id}/read", post(crate::mark_as_read))
        .route("/api/activities/{id}/like", post(crate::toggle_like))
        .route("/api/activities/{id}/comments", post(crate::add_comment))
        // Users
        .route("/api/users", get(crate::list_users).post(crate::create_user))
        .route(
            "/api/users/{id}",
            get(crate::get_user)
                .patch(crate::update_user)
                .delete(crate::delete_user),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
