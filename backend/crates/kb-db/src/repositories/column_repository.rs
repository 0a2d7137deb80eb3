use crate::{MemoryStore, Result as DbErrorResult};

use kb_core::{Column, ColumnPatch, NewColumn};

use async_trait::async_trait;

/// Columns are addressed through their board. Every method returns `None`
/// when the board is missing.
#[async_trait]
pub trait ColumnRepository: Send + Sync {
    async fn find_by_board(&self, board_id: &str) -> DbErrorResult<Option<Vec<Column>>>;

    async fn find_by_id(&self, board_id: &str, column_id: &str)
    -> DbErrorResult<Option<Column>>;

    /// Append a column to the end of the board.
    async fn create(&self, board_id: &str, column: NewColumn) -> DbErrorResult<Option<Column>>;

    async fn update(
        &self,
        board_id: &str,
        column_id: &str,
        patch: ColumnPatch,
    ) -> DbErrorResult<Option<Column>>;

    /// Remove a column and every card in it.
    async fn delete(&self, board_id: &str, column_id: &str) -> DbErrorResult<Option<Column>>;
}

pub struct MemoryColumnRepository {
    store: MemoryStore,
}

impl MemoryColumnRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ColumnRepository for MemoryColumnRepository {
    async fn find_by_board(&self, board_id: &str) -> DbErrorResult<Option<Vec<Column>>> {
        let data = self.store.read().await;
        Ok(data
            .boards
            .iter()
            .find(|b| b.id == board_id)
            .map(|b| b.columns.clone()))
    }

    async fn find_by_id(
        &self,
        board_id: &str,
        column_id: &str,
    ) -> DbErrorResult<Option<Column>> {
        let data = self.store.read().await;
        Ok(data
            .boards
            .iter()
            .find(|b| b.id == board_id)
            .and_then(|b| b.column(column_id))
            .cloned())
    }

    async fn create(&self, board_id: &str, column: NewColumn) -> DbErrorResult<Option<Column>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };
        let column = column.into_column(board_id);
        board.columns.push(column.clone());
        board.touch();
        Ok(Some(column))
    }

    async fn update(
        &self,
        board_id: &str,
        column_id: &str,
        patch: ColumnPatch,
    ) -> DbErrorResult<Option<Column>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };
        let Some(column) = board.column_mut(column_id) else {
            return Ok(None);
        };
        patch.apply_to(column);
        let column = column.clone();
        board.touch();
        Ok(Some(column))
    }

    async fn delete(&self, board_id: &str, column_id: &str) -> DbErrorResult<Option<Column>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };
        let Some(index) = board.columns.iter().position(|c| c.id == column_id) else {
            return Ok(None);
        };
        let removed = board.columns.remove(index);
        board.touch();
        Ok(Some(removed))
    }
}
