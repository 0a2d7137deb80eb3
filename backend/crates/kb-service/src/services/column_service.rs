use crate::services::lookup;
use crate::validation::required_name;
use crate::{Result as ServiceErrorResult, ServiceError, activity_log};

use kb_config::ValidationConfig;
use kb_core::{Column, ColumnPatch, NewColumn, UserSummary};
use kb_db::Repositories;

#[derive(Clone)]
pub struct ColumnService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl ColumnService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    pub async fn list_columns(&self, board_id: &str) -> ServiceErrorResult<Vec<Column>> {
        self.repos
            .columns
            .find_by_board(board_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))
    }

    /// Append a column to the board. New columns start without cards.
    pub async fn add_column(
        &self,
        actor: &UserSummary,
        board_id: &str,
        data: NewColumn,
    ) -> ServiceErrorResult<Column> {
        let name = required_name(&data.name, "name", self.limits.max_name_length)?;
        let board = lookup::board(&self.repos, board_id).await?;

        let column = self
            .repos
            .columns
            .create(board_id, NewColumn::named(name))
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))?;

        self.repos
            .activities
            .create(activity_log::column_added(actor, &board, &column))
            .await?;

        Ok(column)
    }

    /// Apply `patch`. An activity is recorded only when the name changes.
    pub async fn update_column(
        &self,
        actor: &UserSummary,
        board_id: &str,
        column_id: &str,
        mut patch: ColumnPatch,
    ) -> ServiceErrorResult<Column> {
        if let Some(name) = &patch.name {
            patch.name = Some(required_name(name, "name", self.limits.max_name_length)?);
        }

        let board = lookup::board(&self.repos, board_id).await?;
        let before = lookup::column(&board, column_id)?;

        let after = self
            .repos
            .columns
            .update(board_id, column_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::COLUMN_NOT_FOUND))?;

        if before.name != after.name {
            self.repos
                .activities
                .create(activity_log::column_renamed(actor, &board, before, &after))
                .await?;
        }

        Ok(after)
    }

    /// Delete the column and every card in it.
    pub async fn delete_column(
        &self,
        actor: &UserSummary,
        board_id: &str,
        column_id: &str,
    ) -> ServiceErrorResult<Column> {
        let board = lookup::board(&self.repos, board_id).await?;

        let column = self
            .repos
            .columns
            .delete(board_id, column_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::COLUMN_NOT_FOUND))?;

        self.repos
            .activities
            .create(activity_log::column_deleted(actor, &board, &column))
            .await?;

        Ok(column)
    }
}
