//! Card reordering for drag and drop.
//!
//! `reorder` computes the board a drop gesture produces without touching the
//! server. Confirmation and reconciliation live in `state::BoardDetail`.

use kb_core::Board;

use serde::{Deserialize, Serialize};

/// A position inside a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self {
            column_id: column_id.into(),
            index,
        }
    }
}

/// Outcome of a drag gesture. `destination` is `None` when the card was
/// dropped outside any column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragResult {
    pub card_id: String,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragResult {
    pub fn new(
        card_id: impl Into<String>,
        source: DragLocation,
        destination: Option<DragLocation>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            source,
            destination,
        }
    }
}

/// Board after applying `drag`, or `None` when the drop changes nothing.
///
/// The card leaves the source list by position, never by id, and is inserted
/// at the destination index clamped to the list length. Both columns are
/// replaced in the returned value at once.
pub fn reorder(board: &Board, drag: &DragResult) -> Option<Board> {
    let destination = drag.destination.as_ref()?;
    if *destination == drag.source {
        return None;
    }

    let source_pos = board
        .columns
        .iter()
        .position(|c| c.id == drag.source.column_id)?;
    let destination_pos = board
        .columns
        .iter()
        .position(|c| c.id == destination.column_id)?;

    let mut source_cards = board.columns[source_pos].cards.clone();
    if drag.source.index >= source_cards.len() {
        return None;
    }
    let mut card = source_cards.remove(drag.source.index);

    let mut next = board.clone();
    if source_pos == destination_pos {
        let at = destination.index.min(source_cards.len());
        source_cards.insert(at, card);
        next.columns[source_pos].cards = source_cards;
    } else {
        card.column_id = destination.column_id.clone();
        let mut destination_cards = board.columns[destination_pos].cards.clone();
        let at = destination.index.min(destination_cards.len());
        destination_cards.insert(at, card);
        next.columns[source_pos].cards = source_cards;
        next.columns[destination_pos].cards = destination_cards;
    }

    next.recount_tasks();
    Some(next)
}
