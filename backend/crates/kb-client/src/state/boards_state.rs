use crate::{CliClientResult, KanbanApi};

use kb_core::{Board, BoardPatch, NewBoard};

use std::sync::Arc;

use log::warn;

/// Local list of boards. Mutations hit the server first and are merged only
/// when they succeed.
pub struct BoardsState {
    api: Arc<dyn KanbanApi>,
    boards: Vec<Board>,
    error: Option<String>,
}

impl BoardsState {
    pub fn new(api: Arc<dyn KanbanApi>) -> Self {
        Self {
            api,
            boards: Vec::new(),
            error: None,
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Message of the last failed load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn load(&mut self) -> CliClientResult<()> {
        match self.api.list_boards().await {
            Ok(boards) => {
                self.boards = boards;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load boards: {}", e);
                self.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }

    pub async fn create(&mut self, data: &NewBoard) -> CliClientResult<Board> {
        let board = self.api.create_board(data).await?;
        self.boards.push(board.clone());
        Ok(board)
    }

    pub async fn update(&mut self, board_id: &str, patch: &BoardPatch) -> CliClientResult<Board> {
        let board = self.api.update_board(board_id, patch).await?;
        if let Some(existing) = self.boards.iter_mut().find(|b| b.id == board_id) {
            *existing = board.clone();
        }
        Ok(board)
    }

    pub async fn delete(&mut self, board_id: &str) -> CliClientResult<Board> {
        let board = self.api.delete_board(board_id).await?;
        self.boards.retain(|b| b.id != board_id);
        Ok(board)
    }
}
