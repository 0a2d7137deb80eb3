use kb_core::{Activity, Board, Collection, User};

use serde::{Deserialize, Serialize};

/// Everything the in-memory store holds. Also the seed file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub boards: Vec<Board>,
    pub collections: Vec<Collection>,
    pub activities: Vec<Activity>,
    pub users: Vec<User>,
}

impl Snapshot {
    /// Repair derived fields after loading from an external source:
    /// back-references, task counts and feed ordering.
    pub fn normalize(&mut self) {
        for board in &mut self.boards {
            for column in &mut board.columns {
                column.board_id = board.id.clone();
                for card in &mut column.cards {
                    card.column_id = column.id.clone();
                }
            }
            board.recount_tasks();
        }

        self.activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }
}
