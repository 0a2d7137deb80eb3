use crate::ids::{COLUMN_ID_PREFIX, new_id};
use crate::{Column, NewCard};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewColumn {
    pub name: String,
    pub cards: Vec<NewCard>,
}

impl NewColumn {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    pub fn into_column(self, board_id: &str) -> Column {
        let id = new_id(COLUMN_ID_PREFIX);
        let cards = self.cards.into_iter().map(|c| c.into_card(&id)).collect();
        Column {
            id,
            name: self.name,
            cards,
            board_id: board_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnPatch {
    pub name: Option<String>,
}

impl ColumnPatch {
    pub fn renamed(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    pub fn apply_to(self, column: &mut Column) {
        if let Some(name) = self.name {
            column.name = name;
        }
    }
}
