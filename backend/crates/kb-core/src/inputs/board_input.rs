use crate::ids::{BOARD_ID_PREFIX, new_id};
use crate::{Board, BoardMember, CountedList, NewColumn};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fields for creating a board. Every field is optional on the wire; the
/// service layer rejects a blank name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBoard {
    pub name: String,
    pub description: String,
    pub color: String,
    pub members: CountedList<BoardMember>,
    pub columns: Vec<NewColumn>,
}

impl NewBoard {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Materialize the board, assigning fresh ids to it and to every nested
    /// column and card.
    pub fn into_board(self) -> Board {
        let id = new_id(BOARD_ID_PREFIX);
        let now = Utc::now();
        let columns = self
            .columns
            .into_iter()
            .map(|c| c.into_column(&id))
            .collect();

        let mut board = Board {
            id,
            name: self.name,
            description: self.description,
            color: self.color,
            total_tasks: 0,
            members: self.members,
            columns,
            collection_id: None,
            created_at: now,
            updated_at: now,
        };
        board.recount_tasks();
        board
    }
}

/// Partial board update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub members: Option<CountedList<BoardMember>>,
}

impl BoardPatch {
    pub fn apply_to(self, board: &mut Board) {
        if let Some(name) = self.name {
            board.name = name;
        }
        if let Some(description) = self.description {
            board.description = description;
        }
        if let Some(color) = self.color {
            board.color = color;
        }
        if let Some(members) = self.members {
            board.members = members;
        }
        board.touch();
    }
}
