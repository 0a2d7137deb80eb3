use crate::{MemoryStore, Result as DbErrorResult};

use kb_core::{Board, BoardPatch, NewBoard};

use async_trait::async_trait;

#[async_trait]
pub trait BoardRepository: Send + Sync {
    async fn find_all(&self) -> DbErrorResult<Vec<Board>>;

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Board>>;

    async fn find_by_collection(&self, collection_id: &str) -> DbErrorResult<Vec<Board>>;

    /// Store a new board, assigning ids to it and any nested columns and cards.
    async fn create(&self, board: NewBoard) -> DbErrorResult<Board>;

    async fn update(&self, id: &str, patch: BoardPatch) -> DbErrorResult<Option<Board>>;

    /// Remove a board together with its columns and cards.
    async fn delete(&self, id: &str) -> DbErrorResult<Option<Board>>;

    /// Set or clear the board's collection.
    async fn set_collection(
        &self,
        id: &str,
        collection_id: Option<String>,
    ) -> DbErrorResult<Option<Board>>;
}

pub struct MemoryBoardRepository {
    store: MemoryStore,
}

impl MemoryBoardRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BoardRepository for MemoryBoardRepository {
    async fn find_all(&self) -> DbErrorResult<Vec<Board>> {
        Ok(self.store.read().await.boards.clone())
    }

    async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<Board>> {
        let data = self.store.read().await;
        Ok(data.boards.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_collection(&self, collection_id: &str) -> DbErrorResult<Vec<Board>> {
        let data = self.store.read().await;
        Ok(data
            .boards
            .iter()
            .filter(|b| b.collection_id.as_deref() == Some(collection_id))
            .cloned()
            .collect())
    }

    async fn create(&self, board: NewBoard) -> DbErrorResult<Board> {
        let board = board.into_board();
        self.store.write().await.boards.push(board.clone());
        Ok(board)
    }

    async fn update(&self, id: &str, patch: BoardPatch) -> DbErrorResult<Option<Board>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        patch.apply_to(board);
        Ok(Some(board.clone()))
    }

    async fn delete(&self, id: &str) -> DbErrorResult<Option<Board>> {
        let mut data = self.store.write().await;
        let Some(index) = data.boards.iter().position(|b| b.id == id) else {
            return Ok(None);
        };
        Ok(Some(data.boards.remove(index)))
    }

    async fn set_collection(
        &self,
        id: &str,
        collection_id: Option<String>,
    ) -> DbErrorResult<Option<Board>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        board.collection_id = collection_id;
        board.touch();
        Ok(Some(board.clone()))
    }
}
