//! Board member REST API handlers

use crate::{ApiJson, ApiResult, AppState, CurrentUser, DataResponse, UpdateMemberRequest};

use kb_core::BoardMember;
use kb_service::NewMember;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/boards/{id}/members
pub async fn list_members(
    State(state): State<AppState>,
    Path(board_id): Path<String>,
) -> ApiResult<Json<DataResponse<Vec<BoardMember>>>> {
    let members = state.services.members.list_members(&board_id).await?;
    Ok(Json(DataResponse::new(members)))
}

/// POST /api/boards/{id}/members
///
/// Invite by email. Unknown addresses become placeholder members.
pub async fn add_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(board_id): Path<String>,
    ApiJson(data): ApiJson<NewMember>,
) -> ApiResult<(StatusCode, Json<DataResponse<BoardMember>>)> {
    let member = state
        .services
        .members
        .add_member(&user, &board_id, data)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(member))))
}

/// PATCH /api/boards/{id}/members/{memberId}
pub async fn update_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, member_id)): Path<(String, String)>,
    ApiJson(request): ApiJson<UpdateMemberRequest>,
) -> ApiResult<Json<DataResponse<BoardMember>>> {
    let member = state
        .services
        .members
        .update_member_role(&user, &board_id, &member_id, request.role)
        .await?;
    Ok(Json(DataResponse::new(member)))
}

/// DELETE /api/boards/{id}/members/{memberId}
pub async fn remove_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, member_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<BoardMember>>> {
    let member = state
        .services
        .members
        .remove_member(&user, &board_id, &member_id)
        .await?;
    Ok(Json(DataResponse::new(member)))
}
