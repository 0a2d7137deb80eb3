//! User REST API handlers

use crate::{ApiJson, ApiResult, AppState, DataResponse};

use kb_core::{NewUser, User, UserPatch};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<DataResponse<Vec<User>>>> {
    let users = state.services.users.list().await?;
    Ok(Json(DataResponse::new(users)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<NewUser>,
) -> ApiResult<(StatusCode, Json<DataResponse<User>>)> {
    let user = state.services.users.create(data).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DataResponse<User>>> {
    let user = state.services.users.get(&user_id).await?;
    Ok(Json(DataResponse::new(user)))
}

/// PATCH /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> ApiResult<Json<DataResponse<User>>> {
    let user = state.services.users.update(&user_id, patch).await?;
    Ok(Json(DataResponse::new(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<DataResponse<User>>> {
    let user = state.services.users.delete(&user_id).await?;
    Ok(Json(DataResponse::new(user)))
}
