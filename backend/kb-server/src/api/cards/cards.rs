//! Card REST API handlers

use crate::{ApiError, ApiJson, ApiResult, AppState, CurrentUser, DataResponse, MoveCardRequest};

use kb_core::{Card, CardPatch, NewCard};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

pub const DESTINATION_REQUIRED: &str = "Destination column ID is required";

/// GET /api/boards/{id}/columns/{columnId}/cards
pub async fn list_cards(
    State(state): State<AppState>,
    Path((board_id, column_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<Vec<Card>>>> {
    let cards = state.services.cards.list_cards(&board_id, &column_id).await?;
    Ok(Json(DataResponse::new(cards)))
}

/// POST /api/boards/{id}/columns/{columnId}/cards
pub async fn add_card(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, column_id)): Path<(String, String)>,
    ApiJson(data): ApiJson<NewCard>,
) -> ApiResult<(StatusCode, Json<DataResponse<Card>>)> {
    let card = state
        .services
        .cards
        .add_card(&user, &board_id, &column_id, data)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(card))))
}

/// GET /api/boards/{id}/columns/{columnId}/cards/{cardId}
pub async fn get_card(
    State(state): State<AppState>,
    Path((board_id, column_id, card_id)): Path<(String, String, String)>,
) -> ApiResult<Json<DataResponse<Card>>> {
    let card = state
        .services
        .cards
        .get_card(&board_id, &column_id, &card_id)
        .await?;
    Ok(Json(DataResponse::new(card)))
}

/// PATCH /api/boards/{id}/columns/{columnId}/cards/{cardId}
pub async fn update_card(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, column_id, card_id)): Path<(String, String, String)>,
    ApiJson(patch): ApiJson<CardPatch>,
) -> ApiResult<Json<DataResponse<Card>>> {
    let card = state
        .services
        .cards
        .update_card(&user, &board_id, &column_id, &card_id, patch)
        .await?;
    Ok(Json(DataResponse::new(card)))
}

/// DELETE /api/boards/{id}/columns/{columnId}/cards/{cardId}
pub async fn delete_card(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, column_id, card_id)): Path<(String, String, String)>,
) -> ApiResult<Json<DataResponse<Card>>> {
    let card = state
        .services
        .cards
        .delete_card(&user, &board_id, &column_id, &card_id)
        .await?;
    Ok(Json(DataResponse::new(card)))
}

/// POST /api/boards/{id}/columns/{columnId}/cards/{cardId}/move
///
/// Moves the card out of `columnId` into `destinationColumnId`, which may be
/// the same column.
pub async fn move_card(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((board_id, column_id, card_id)): Path<(String, String, String)>,
    ApiJson(request): ApiJson<MoveCardRequest>,
) -> ApiResult<Json<DataResponse<Card>>> {
    let destination = request
        .destination_column_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(DESTINATION_REQUIRED))?;

    let card = state
        .services
        .cards
        .move_card(
            &user,
            &board_id,
            &column_id,
            &destination,
            &card_id,
            request.index,
        )
        .await?;
    Ok(Json(DataResponse::new(card)))
}
