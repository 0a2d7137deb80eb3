use crate::{CliClientResult, KanbanApi};

use kb_core::{Board, Collection, CollectionPatch, NewCollection};

use std::sync::Arc;

use log::warn;

pub struct CollectionsState {
    api: Arc<dyn KanbanApi>,
    collections: Vec<Collection>,
    error: Option<String>,
}

impl CollectionsState {
    pub fn new(api: Arc<dyn KanbanApi>) -> Self {
        Self {
            api,
            collections: Vec::new(),
            error: None,
        }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, collection_id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == collection_id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self) -> CliClientResult<()> {
        match self.api.list_collections().await {
            Ok(collections) => {
                self.collections = collections;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load collections: {}", e);
                self.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }

    /// Boards of one collection, fetched on demand and not cached
    pub async fn boards(&self, collection_id: &str) -> CliClientResult<Vec<Board>> {
        self.api.list_collection_boards(collection_id).await
    }

    pub async fn create(&mut self, data: &NewCollection) -> CliClientResult<Collection> {
        let collection = self.api.create_collection(data).await?;
        self.collections.push(collection.clone());
        Ok(collection)
    }

    pub async fn update(
        &mut self,
        collection_id: &str,
        patch: &CollectionPatch,
    ) -> CliClientResult<Collection> {
        let collection = self.api.update_collection(collection_id, patch).await?;
        if let Some(existing) = self.collections.iter_mut().find(|c| c.id == collection_id) {
            *existing = collection.clone();
        }
        Ok(collection)
    }

    pub async fn delete(&mut self, collection_id: &str) -> CliClientResult<Collection> {
        let collection = self.api.delete_collection(collection_id).await?;
        self.collections.retain(|c| c.id != collection_id);
        Ok(collection)
    }

    /// Assign a board. Counts are reloaded because the board may have left
    /// another collection.
    pub async fn add_board(
        &mut self,
        collection_id: &str,
        board_id: &str,
    ) -> CliClientResult<Board> {
        let board = self
            .api
            .add_board_to_collection(collection_id, board_id)
            .await?;
        self.refresh_counts().await?;
        Ok(board)
    }

    pub async fn remove_board(
        &mut self,
        collection_id: &str,
        board_id: &str,
    ) -> CliClientResult<Board> {
        let board = self
            .api
            .remove_board_from_collection(collection_id, board_id)
            .await?;
        if let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) {
            collection.board_count = collection.board_count.saturating_sub(1);
        }
        Ok(board)
    }

    async fn refresh_counts(&mut self) -> CliClientResult<()> {
        let fresh = self.api.list_collections().await?;
        for collection in &mut self.collections {
            if let Some(updated) = fresh.iter().find(|c| c.id == collection.id) {
                collection.board_count = updated.board_count;
            }
        }
        Ok(())
    }
}
