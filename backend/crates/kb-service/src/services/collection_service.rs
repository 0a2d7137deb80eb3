use crate::services::lookup;
use crate::validation::{optional_text, required_name};
use crate::{Result as ServiceErrorResult, ServiceError, activity_log};

use kb_config::ValidationConfig;
use kb_core::{Board, Collection, CollectionPatch, NewCollection, UserSummary};
use kb_db::Repositories;

use log::debug;

/// Collections group boards through `Board::collection_id`. A board belongs
/// to at most one collection and `board_count` follows assignment.
#[derive(Clone)]
pub struct CollectionService {
    repos: Repositories,
    limits: ValidationConfig,
}

impl CollectionService {
    pub fn new(repos: Repositories, limits: ValidationConfig) -> Self {
        Self { repos, limits }
    }

    pub async fn list(&self) -> ServiceErrorResult<Vec<Collection>> {
        Ok(self.repos.collections.find_all().await?)
    }

    pub async fn get(&self, collection_id: &str) -> ServiceErrorResult<Collection> {
        lookup::collection(&self.repos, collection_id).await
    }

    pub async fn create(
        &self,
        actor: &UserSummary,
        mut data: NewCollection,
    ) -> ServiceErrorResult<Collection> {
        data.name = required_name(&data.name, "name", self.limits.max_name_length)?;
        if let Some(description) = &data.description {
            data.description = Some(optional_text(
                description,
                "description",
                self.limits.max_description_length,
            )?);
        }

        let collection = self.repos.collections.create(data).await?;
        self.repos
            .activities
            .create(activity_log::collection_created(actor, &collection))
            .await?;

        Ok(collection)
    }

    /// Apply `patch`. An activity is recorded only when the name changes.
    pub async fn update(
        &self,
        actor: &UserSummary,
        collection_id: &str,
        mut patch: CollectionPatch,
    ) -> ServiceErrorResult<Collection> {
        if let Some(name) = &patch.name {
            patch.name = Some(required_name(name, "name", self.limits.max_name_length)?);
        }

        let before = lookup::collection(&self.repos, collection_id).await?;
        let after = self
            .repos
            .collections
            .update(collection_id, patch)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::COLLECTION_NOT_FOUND))?;

        if before.name != after.name {
            self.repos
                .activities
                .create(activity_log::collection_renamed(actor, &before, &after))
                .await?;
        }

        Ok(after)
    }

    /// Delete the collection. Its boards stay, unassigned.
    pub async fn delete(
        &self,
        actor: &UserSummary,
        collection_id: &str,
    ) -> ServiceErrorResult<Collection> {
        let collection = self
            .repos
            .collections
            .delete(collection_id)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::COLLECTION_NOT_FOUND))?;

        for board in self.repos.boards.find_by_collection(collection_id).await? {
            self.repos.boards.set_collection(&board.id, None).await?;
        }

        self.repos
            .activities
            .create(activity_log::collection_deleted(actor, &collection))
            .await?;

        Ok(collection)
    }

    pub async fn list_boards(&self, collection_id: &str) -> ServiceErrorResult<Vec<Board>> {
        lookup::collection(&self.repos, collection_id).await?;
        Ok(self
            .repos
            .boards
            .find_by_collection(collection_id)
            .await?)
    }

    /// Assign a board to the collection, moving it out of any previous one.
    /// Assigning a board to its current collection changes nothing.
    pub async fn add_board(
        &self,
        actor: &UserSummary,
        collection_id: &str,
        board_id: &str,
    ) -> ServiceErrorResult<Board> {
        let collection = lookup::collection(&self.repos, collection_id).await?;
        let board = lookup::board(&self.repos, board_id).await?;

        if board.collection_id.as_deref() == Some(collection_id) {
            return Ok(board);
        }

        if let Some(previous) = &board.collection_id {
            self.repos
                .collections
                .adjust_board_count(previous, -1)
                .await?;
        }

        let board = self
            .repos
            .boards
            .set_collection(board_id, Some(collection_id.to_string()))
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))?;
        self.repos
            .collections
            .adjust_board_count(collection_id, 1)
            .await?;

        self.repos
            .activities
            .create(activity_log::board_added_to_collection(
                actor,
                &board,
                &collection,
            ))
            .await?;

        debug!("Added board {} to collection {}", board.id, collection.id);
        Ok(board)
    }

    pub async fn remove_board(
        &self,
        actor: &UserSummary,
        collection_id: &str,
        board_id: &str,
    ) -> ServiceErrorResult<Board> {
        let collection = lookup::collection(&self.repos, collection_id).await?;
        let board = lookup::board(&self.repos, board_id).await?;

        if board.collection_id.as_deref() != Some(collection_id) {
            return Err(ServiceError::not_found("Board is not in this collection"));
        }

        let board = self
            .repos
            .boards
            .set_collection(board_id, None)
            .await?
            .ok_or_else(|| ServiceError::not_found(lookup::BOARD_NOT_FOUND))?;
        self.repos
            .collections
            .adjust_board_count(collection_id, -1)
            .await?;

        self.repos
            .activities
            .create(activity_log::board_removed_from_collection(
                actor,
                &board,
                &collection,
            ))
            .await?;

        Ok(board)
    }
}
