use crate::drag::{DragResult, reorder};
use crate::{CliClientResult, KanbanApi};

use kb_core::{Board, BoardPatch, Card, CardPatch, Column, ColumnPatch, NewCard, NewColumn};

use std::sync::Arc;

use log::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        card_id: String,
    },
}

/// What `drag_end` does with the optimistic board when the server rejects
/// the move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconcilePolicy {
    /// Leave the reordered board in place
    KeepOptimistic,
    /// Restore the board as it was before the drop
    #[default]
    RevertOnFailure,
}

/// One board with its columns and cards.
///
/// Every mutation is sent first and merged from the server's response on
/// success. `drag_end` is the exception: it updates local state before the
/// request and reconciles afterwards according to the `ReconcilePolicy`.
pub struct BoardDetail {
    api: Arc<dyn KanbanApi>,
    board_id: String,
    board: Option<Board>,
    error: Option<String>,
    drag: DragState,
    policy: ReconcilePolicy,
}

impl BoardDetail {
    pub fn new(api: Arc<dyn KanbanApi>, board_id: impl Into<String>) -> Self {
        Self {
            api,
            board_id: board_id.into(),
            board: None,
            error: None,
            drag: DragState::Idle,
            policy: ReconcilePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReconcilePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> ReconcilePolicy {
        self.policy
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// While true, card clicks should not open the card
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub async fn load(&mut self) -> CliClientResult<()> {
        match self.api.get_board(&self.board_id).await {
            Ok(board) => {
                self.board = Some(board);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load board {}: {}", self.board_id, e);
                self.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }

    pub async fn update_board(&mut self, patch: &BoardPatch) -> CliClientResult<Board> {
        let board = self.api.update_board(&self.board_id, patch).await?;
        self.board = Some(board.clone());
        Ok(board)
    }

    // =========================================================================
    // Columns
    // =========================================================================

    pub async fn add_column(&mut self, data: &NewColumn) -> CliClientResult<Column> {
        let column = self.api.add_column(&self.board_id, data).await?;
        self.merge(|board| board.columns.push(column.clone()));
        Ok(column)
    }

    pub async fn update_column(
        &mut self,
        column_id: &str,
        patch: &ColumnPatch,
    ) -> CliClientResult<Column> {
        let column = self
            .api
            .update_column(&self.board_id, column_id, patch)
            .await?;
        self.merge(|board| {
            if let Some(existing) = board.column_mut(column_id) {
                *existing = column.clone();
            }
        });
        Ok(column)
    }

    pub async fn delete_column(&mut self, column_id: &str) -> CliClientResult<Column> {
        let column = self.api.delete_column(&self.board_id, column_id).await?;
        self.merge(|board| board.columns.retain(|c| c.id != column_id));
        Ok(column)
    }

    // =========================================================================
    // Cards
    // =========================================================================

    pub async fn add_card(&mut self, column_id: &str, data: &NewCard) -> CliClientResult<Card> {
        let card = self.api.add_card(&self.board_id, column_id, data).await?;
        self.merge(|board| {
            if let Some(column) = board.column_mut(column_id) {
                column.cards.push(card.clone());
            }
        });
        Ok(card)
    }

    pub async fn update_card(
        &mut self,
        column_id: &str,
        card_id: &str,
        patch: &CardPatch,
    ) -> CliClientResult<Card> {
        let card = self
            .api
            .update_card(&self.board_id, column_id, card_id, patch)
            .await?;
        self.merge(|board| {
            if let Some(existing) = board
                .column_mut(column_id)
                .and_then(|c| c.card_mut(card_id))
            {
                *existing = card.clone();
            }
        });
        Ok(card)
    }

    pub async fn delete_card(&mut self, column_id: &str, card_id: &str) -> CliClientResult<Card> {
        let card = self
            .api
            .delete_card(&self.board_id, column_id, card_id)
            .await?;
        self.merge(|board| {
            if let Some(column) = board.column_mut(column_id) {
                column.cards.retain(|c| c.id != card_id);
            }
        });
        Ok(card)
    }

    /// Move through the server, then mirror the move locally. Without an
    /// index the card lands at the end of the destination.
    pub async fn move_card(
        &mut self,
        source_column_id: &str,
        destination_column_id: &str,
        card_id: &str,
        index: Option<usize>,
    ) -> CliClientResult<Card> {
        let card = self
            .api
            .move_card(
                &self.board_id,
                source_column_id,
                card_id,
                destination_column_id,
                index,
            )
            .await?;
        self.merge(|board| {
            if let Some(source) = board.column_mut(source_column_id) {
                source.cards.retain(|c| c.id != card_id);
            }
            if let Some(destination) = board.column_mut(destination_column_id) {
                let at = index
                    .unwrap_or(destination.cards.len())
                    .min(destination.cards.len());
                destination.cards.insert(at, card.clone());
            }
        });
        Ok(card)
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    pub fn drag_start(&mut self, card_id: impl Into<String>) {
        self.drag = DragState::Dragging {
            card_id: card_id.into(),
        };
    }

    /// Finish a drag. The reordered board is shown immediately, then the
    /// move is confirmed with the server.
    ///
    /// Returns `Ok(None)` when the drop changed nothing and no request was
    /// made. The drag state is back to idle whatever the outcome.
    pub async fn drag_end(&mut self, drag: &DragResult) -> CliClientResult<Option<Card>> {
        self.drag = DragState::Idle;

        let Some(snapshot) = self.board.clone() else {
            return Ok(None);
        };
        let Some(reordered) = reorder(&snapshot, drag) else {
            return Ok(None);
        };
        let Some(destination) = &drag.destination else {
            return Ok(None);
        };

        // The dragged card is the one at the source position.
        let card_id = snapshot
            .column(&drag.source.column_id)
            .and_then(|c| c.cards.get(drag.source.index))
            .map(|c| c.id.clone())
            .unwrap_or_else(|| drag.card_id.clone());

        self.board = Some(reordered);

        let result = self
            .api
            .move_card(
                &self.board_id,
                &drag.source.column_id,
                &card_id,
                &destination.column_id,
                Some(destination.index),
            )
            .await;

        match result {
            Ok(card) => {
                debug!(
                    "Confirmed move of card {} to column {}",
                    card.id, destination.column_id
                );
                Ok(Some(card))
            }
            Err(e) => {
                warn!("Move of card {} failed: {}", card_id, e);
                if self.policy == ReconcilePolicy::RevertOnFailure {
                    self.board = Some(snapshot);
                }
                self.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }

    fn merge(&mut self, apply: impl FnOnce(&mut Board)) {
        if let Some(board) = self.board.as_mut() {
            apply(board);
            board.recount_tasks();
        }
    }
}
