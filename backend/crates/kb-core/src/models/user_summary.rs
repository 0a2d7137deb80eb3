use crate::User;

use serde::{Deserialize, Serialize};

/// Compact user reference embedded in cards, activities and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub initials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserSummary {
    pub fn new(name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            initials: initials.into(),
            avatar: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            name: user.name.clone(),
            initials: user.initials.clone(),
            avatar: user.avatar.clone(),
        }
    }
}
