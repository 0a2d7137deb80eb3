//! Collection REST API handlers

use crate::{ApiJson, ApiResult, AppState, CurrentUser, DataResponse};

use kb_core::{Board, Collection, CollectionPatch, NewCollection};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/collections
pub async fn list_collections(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<Vec<Collection>>>> {
    let collections = state.services.collections.list().await?;
    Ok(Json(DataResponse::new(collections)))
}

/// POST /api/collections
pub async fn create_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(data): ApiJson<NewCollection>,
) -> ApiResult<(StatusCode, Json<DataResponse<Collection>>)> {
    let collection = state.services.collections.create(&user, data).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(collection))))
}

/// GET /api/collections/{id}
pub async fn get_collection(
    State(state): State<AppState>,
    Path(collection_id): Path<String>,
) -> ApiResult<Json<DataResponse<Collection>>> {
    let collection = state.services.collections.get(&collection_id).await?;
    Ok(Json(DataResponse::new(collection)))
}

/// PATCH /api/collections/{id}
pub async fn update_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(collection_id): Path<String>,
    ApiJson(patch): ApiJson<CollectionPatch>,
) -> ApiResult<Json<DataResponse<Collection>>> {
    let collection = state
        .services
        .collections
        .update(&user, &collection_id, patch)
        .await?;
    Ok(Json(DataResponse::new(collection)))
}

/// DELETE /api/collections/{id}
pub async fn delete_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(collection_id): Path<String>,
) -> ApiResult<Json<DataResponse<Collection>>> {
    let collection = state
        .services
        .collections
        .delete(&user, &collection_id)
        .await?;
    Ok(Json(DataResponse::new(collection)))
}

/// GET /api/collections/{id}/boards
pub async fn list_collection_boards(
    State(state): State<AppState>,
    Path(collection_id): Path<String>,
) -> ApiResult<Json<DataResponse<Vec<Board>>>> {
    let boards = state.services.collections.list_boards(&collection_id).await?;
    Ok(Json(DataResponse::new(boards)))
}

/// POST /api/collections/{id}/boards/{boardId}
pub async fn add_board_to_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((collection_id, board_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<Board>>> {
    let board = state
        .services
        .collections
        .add_board(&user, &collection_id, &board_id)
        .await?;
    Ok(Json(DataResponse::new(board)))
}

/// DELETE /api/collections/{id}/boards/{boardId}
pub async fn remove_board_from_collection(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((collection_id, board_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<Board>>> {
    let board = state
        .services
        .collections
        .remove_board(&user, &collection_id, &board_id)
        .await?;
    Ok(Json(DataResponse::new(board)))
}
