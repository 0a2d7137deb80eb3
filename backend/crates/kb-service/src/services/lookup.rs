use crate::{Result as ServiceErrorResult, ServiceError};

use kb_core::{Board, Card, Collection, Column};
use kb_db::Repositories;

pub(crate) const BOARD_NOT_FOUND: &str = "Board not found";
pub(crate) const COLUMN_NOT_FOUND: &str = "Column not found";
pub(crate) const CARD_NOT_FOUND: &str = "Card not found";
pub(crate) const COLLECTION_NOT_FOUND: &str = "Collection not found";
pub(crate) const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const MEMBER_NOT_FOUND: &str = "Member not found";

pub(crate) async fn board(repos: &Repositories, board_id: &str) -> ServiceErrorResult<Board> {
    repos
        .boards
        .find_by_id(board_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(BOARD_NOT_FOUND))
}

pub(crate) fn column<'a>(board: &'a Board, column_id: &str) -> ServiceErrorResult<&'a Column> {
    board
        .column(column_id)
        .ok_or_else(|| ServiceError::not_found(COLUMN_NOT_FOUND))
}

pub(crate) fn card<'a>(column: &'a Column, card_id: &str) -> ServiceErrorResult<&'a Card> {
    column
        .card(card_id)
        .ok_or_else(|| ServiceError::not_found(CARD_NOT_FOUND))
}

pub(crate) async fn collection(
    repos: &Repositories,
    collection_id: &str,
) -> ServiceErrorResult<Collection> {
    repos
        .collections
        .find_by_id(collection_id)
        .await?
        .ok_or_else(|| ServiceError::not_found(COLLECTION_NOT_FOUND))
}
