//! Activity feed REST API handlers

use crate::{
    AddCommentRequest, ApiJson, ApiQuery, ApiResult, AppState, CurrentUser, DataResponse,
    MarkAllReadResponse,
};

use kb_core::{Activity, ActivityFilter};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/activities?type=&read=&boardId=
///
/// Newest first. Every query parameter is optional.
pub async fn list_activities(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<ActivityFilter>,
) -> ApiResult<Json<DataResponse<Vec<Activity>>>> {
    let activities = state.services.activities.list(&filter).await?;
    Ok(Json(DataResponse::new(activities)))
}

/// GET /api/activities/{id}
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> ApiResult<Json<DataResponse<Activity>>> {
    let activity = state.services.activities.get(&activity_id).await?;
    Ok(Json(DataResponse::new(activity)))
}

/// POST /api/activities/{id}/read
pub async fn mark_as_read(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> ApiResult<Json<DataResponse<Activity>>> {
    let activity = state.services.activities.mark_as_read(&activity_id).await?;
    Ok(Json(DataResponse::new(activity)))
}

/// POST /api/activities/read-all
pub async fn mark_all_as_read(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<MarkAllReadResponse>>> {
    let updated = state.services.activities.mark_all_as_read().await?;
    Ok(Json(DataResponse::new(MarkAllReadResponse { updated })))
}

/// POST /api/activities/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> ApiResult<Json<DataResponse<Activity>>> {
    let activity = state.services.activities.toggle_like(&activity_id).await?;
    Ok(Json(DataResponse::new(activity)))
}

/// POST /api/activities/{id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(activity_id): Path<String>,
    ApiJson(request): ApiJson<AddCommentRequest>,
) -> ApiResult<(StatusCode, Json<DataResponse<Activity>>)> {
    let activity = state
        .services
        .activities
        .add_comment(&user, &activity_id, &request.text)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(activity))))
}
