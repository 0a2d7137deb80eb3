use crate::{MemoryStore, Result as DbErrorResult};

use kb_core::{Card, CardPatch, NewCard};

use async_trait::async_trait;

/// Cards are addressed through board and column. Every method returns `None`
/// when an ancestor is missing.
#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn find_by_column(
        &self,
        board_id: &str,
        column_id: &str,
    ) -> DbErrorResult<Option<Vec<Card>>>;

    async fn find_by_id(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> DbErrorResult<Option<Card>>;

    /// Append a card to the end of the column.
    async fn create(
        &self,
        board_id: &str,
        column_id: &str,
        card: NewCard,
    ) -> DbErrorResult<Option<Card>>;

    async fn update(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
        patch: CardPatch,
    ) -> DbErrorResult<Option<Card>>;

    async fn delete(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> DbErrorResult<Option<Card>>;

    /// Move a card between columns of one board, or within one column.
    ///
    /// The card is removed from the source first, then inserted into the
    /// destination at `index` (clamped to its length) or appended when no
    /// index is given. Returns the card as stored after the move.
    async fn move_card(
        &self,
        board_id: &str,
        card_id: &str,
        source_column_id: &str,
        destination_column_id: &str,
        index: Option<usize>,
    ) -> DbErrorResult<Option<Card>>;
}

pub struct MemoryCardRepository {
    store: MemoryStore,
}

impl MemoryCardRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CardRepository for MemoryCardRepository {
    async fn find_by_column(
        &self,
        board_id: &str,
        column_id: &str,
    ) -> DbErrorResult<Option<Vec<Card>>> {
        let data = self.store.read().await;
        Ok(data
            .boards
            .iter()
            .find(|b| b.id == board_id)
            .and_then(|b| b.column(column_id))
            .map(|c| c.cards.clone()))
    }

    async fn find_by_id(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> DbErrorResult<Option<Card>> {
        let data = self.store.read().await;
        Ok(data
            .boards
            .iter()
            .find(|b| b.id == board_id)
            .and_then(|b| b.column(column_id))
            .and_then(|c| c.card(card_id))
            .cloned())
    }

    async fn create(
        &self,
        board_id: &str,
        column_id: &str,
        card: NewCard,
    ) -> DbErrorResult<Option<Card>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };
        let Some(column) = board.column_mut(column_id) else {
            return Ok(None);
        };
        let card = card.into_card(column_id);
        column.cards.push(card.clone());
        board.touch();
        Ok(Some(card))
    }

    async fn update(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
        patch: CardPatch,
    ) -> DbErrorResult<Option<Card>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };
        let Some(card) = board
            .column_mut(column_id)
            .and_then(|c| c.card_mut(card_id))
        else {
            return Ok(None);
        };
        patch.apply_to(card);
        let card = card.clone();
        board.touch();
        Ok(Some(card))
    }

    async fn delete(
        &self,
        board_id: &str,
        column_id: &str,
        card_id: &str,
    ) -> DbErrorResult<Option<Card>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };
        let Some(column) = board.column_mut(column_id) else {
            return Ok(None);
        };
        let Some(index) = column.card_position(card_id) else {
            return Ok(None);
        };
        let removed = column.cards.remove(index);
        board.touch();
        Ok(Some(removed))
    }

    async fn move_card(
        &self,
        board_id: &str,
        card_id: &str,
        source_column_id: &str,
        destination_column_id: &str,
        index: Option<usize>,
    ) -> DbErrorResult<Option<Card>> {
        let mut data = self.store.write().await;
        let Some(board) = data.boards.iter_mut().find(|b| b.id == board_id) else {
            return Ok(None);
        };

        // Validate everything before touching either column.
        let Some(source_index) = board.columns.iter().position(|c| c.id == source_column_id)
        else {
            return Ok(None);
        };
        let Some(destination_index) = board
            .columns
            .iter()
            .position(|c| c.id == destination_column_id)
        else {
            return Ok(None);
        };
        let Some(card_index) = board.columns[source_index].card_position(card_id) else {
            return Ok(None);
        };

        let mut card = board.columns[source_index].cards.remove(card_index);
        card.column_id = destination_column_id.to_string();

        let destination = &mut board.columns[destination_index].cards;
        let at = index.map_or(destination.len(), |i| i.min(destination.len()));
        destination.insert(at, card.clone());

        board.touch();
        Ok(Some(card))
    }
}
