//! Board entity - top-level container of columns and cards.

use crate::{BoardMember, Column, CountedList};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Kanban board. Owns its columns, which own their cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    /// Number of cards across all columns, maintained by the store
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    pub members: CountedList<BoardMember>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Recompute `total_tasks` from the current columns.
    pub fn recount_tasks(&mut self) {
        self.total_tasks = self.card_count() as u32;
    }

    /// Stamp `updated_at` and refresh derived fields after a mutation.
    pub fn touch(&mut self) {
        self.recount_tasks();
        self.updated_at = Utc::now();
    }
}
