//! Column REST API handlers

use crate::{ApiJson, ApiResult, AppState, CurrentUser, DataResponse};

use kb_core::{Column, ColumnPatch, NewColumn};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/boards/{id}/columns
pub async fn list_columns(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Json<DataResponse<Vec<Column>>>> {
    let columns = state.services.columns.list_columns(&board_id).await?;
    Ok(Json(DataResponse::new(columns)))
}

/// POST /api/boards/{id}/columns
pub async fn add_column(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(board_id): Path<String>,
    ApiJson(data): ApiJson<NewColumn>,
) -> ApiResult<(StatusCode, Json<DataResponse<Column>>)> {
    let column = state
        .services
        .columns
        .add_column(&user, &board_id, data)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(column))))
}

/// PATCH /api/boards/{id}/columns/{columnId}
pub async fn update_column(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, column_id)): Path<(String, String)>,
    ApiJson(patch): ApiJson<ColumnPatch>,
) -> ApiResult<Json<DataResponse<Column>>> {
    let column = state
        .services
        .columns
        .update_column(&user, &board_id, &column_id, patch)
        .await?;
    Ok(Json(DataResponse::new(column)))
}

/// DELETE /api/boards/{id}/columns/{columnId}
///
/// Removes the column together with its cards.
pub async fn delete_column(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, column_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<Column>>> {
    let column = state
        .services
        .columns
        .delete_column(&user, &board_id, &column_id)
        .await?;
    Ok(Json(DataResponse::new(column)))
}
