use crate::services::lookup;
use crate::validation::{optional_text, required_name};
use crate::{Result as ServiceErrorResult, ServiceError, activity_log};

use kb_config::ValidationConfig;
use kb_core::{Board, BoardPatch, NewBoard, UserSummary};
use kb_db::Repositories;

use log::debug;

#[derive(Clone)]
pub struct BoardService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl BoardService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    pub async fn list_boards(&self) -> ServiceErrorResult<Vec<Board>> {
        Ok(self.repos.boards.find_all().await?)
    }

    pub async fn get_board(&self, board_id: &str) -> ServiceErrorResult<Board> {
        lookup::board(&self.repos, board_id).await
    }

    /// Create a board. Columns and cards in `data` are created with it;
    /// without them the board starts empty.
    pub async fn create_board(
        &self,
        actor: &UserSummary,
        mut data: NewBoard,
    ) -> ServiceErrorResult<Board> {
        data.name = required_name(&data.name, "name", self.limits.max_name_length)?;
        data.description = optional_text(
            &data.description,
            "description",
            self.limits.max_description_length,
        )?;
        for column in &mut data.columns {
            column.name = required_name(&column.name, "name", self.limits.max_name_length)?;
            for card in &mut column.cards {
                card.title = required_name(&card.title, "title", self.limits.max_title_length)?;
            }
        }

        let board = self.repos.boards.create(data).await?;
        self.repos
            .activities
            .create(activity_log::board_created(actor, &board))
            .await?;

        debug!("Created board {} ({})", board.id, board.name);
        Ok(board)
    }

    /// Merge `patch` into the board. Always records an activity.
    pub async fn update_board(
        &self,
        actor: &UserSummary,
        board_id: &str,
        mut patch: BoardPatch,
    ) -> ServiceErrorResult<Board> {
        if let Some(name) = &patch.name {
            patch.name = Some(required_name(name, "name", self.limits.max_name_length)?);
        }
        if let Some(description) = &patch.description {
            patch.description = Some(optional_text(
                description,
                "description",
                self.limits.max_description_length,
            )?);
        }

        let before = lookup::board(&self.repos, board_id).await?;
        let after = self
            .repos
            .boards
            .update(board_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))?;

        self.repos
            .activities
            .create(activity_log::board_updated(actor, &before, &after))
            .await?;

        Ok(after)
    }

    /// Delete a board with its columns and cards, and release its
    /// collection slot.
    pub async fn delete_board(
        &self,
        actor: &UserSummary,
        board_id: &str,
    ) -> ServiceErrorResult<Board> {
        let board = self
            .repos
            .boards
            .delete(board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))?;

        if let Some(collection_id) = &board.collection_id {
            self.repos
                .collections
                .adjust_board_count(collection_id, -1)
                .await?;
        }

        self.repos
            .activities
            .create(activity_log::board_deleted(actor, &board))
            .await?;

        debug!("Deleted board {} ({})", board.id, board.name);
        Ok(board)
    }
}
