use crate::Collection;
use crate::ids::{COLLECTION_ID_PREFIX, new_id};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A new collection. `board_count` starts at zero and follows board
/// assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCollection {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: Option<String>,
}

impl NewCollection {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn into_collection(self) -> Collection {
        Collection {
            id: new_id(COLLECTION_ID_PREFIX),
            name: self.name,
            description: self.description,
            board_count: 0,
            color: self.color,
            icon: self.icon,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

impl CollectionPatch {
    pub fn apply_to(self, collection: &mut Collection) {
        if let Some(name) = self.name {
            collection.name = name;
        }
        if let Some(description) = self.description {
            collection.description = Some(description);
        }
        if let Some(color) = self.color {
            collection.color = color;
        }
        if let Some(icon) = self.icon {
            collection.icon = Some(icon);
        }
        collection.updated_at = Utc::now();
    }
}
