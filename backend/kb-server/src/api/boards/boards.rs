//! Board REST API handlers

use crate::{ApiJson, ApiResult, AppState, CurrentUser, DataResponse};

use kb_core::{Activity, Board, BoardPatch, NewBoard};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/boards
pub async fn list_boards(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<Board>>>> {
    let boards = state.services.boards.list_boards().await?;
    Ok(Json(DataResponse::new(boards)))
}

/// POST /api/boards
///
/// Create a board. Columns are optional; a board without them starts empty.
pub async fn create_board(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(data): ApiJson<NewBoard>,
) -> ApiResult<(StatusCode, Json<DataResponse<Board>>)> {
    let board = state.services.boards.create_board(&user, data).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(board))))
}

/// GET /api/boards/{id}
pub async fn get_board(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Json<DataResponse<Board>>> {
    let board = state.services.boards.get_board(&board_id).await?;
    Ok(Json(DataResponse::new(board)))
}

/// PATCH /api/boards/{id}
pub async fn update_board(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(board_id): Path<String>,
    ApiJson(patch): ApiJson<BoardPatch>,
) -> ApiResult<Json<DataResponse<Board>>> {
    let board = state
        .services
        .boards
        .update_board(&user, &board_id, patch)
        .await?;
    Ok(Json(DataResponse::new(board)))
}

/// DELETE /api/boards/{id}
pub async fn delete_board(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(board_id): Path<String>,
) -> ApiResult<Json<DataResponse<Board>>> {
    let board = state.services.boards.delete_board(&user, &board_id).await?;
    Ok(Json(DataResponse::new(board)))
}

/// GET /api/boards/{id}/activities
pub async fn list_board_activities(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Json<DataResponse<Vec<Activity>>>> {
    let activities = state.services.activities.list_for_board(&board_id).await?;
    Ok(Json(DataResponse::new(activities)))
}
