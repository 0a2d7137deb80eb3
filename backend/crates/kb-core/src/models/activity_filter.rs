use crate::{Activity, ActivityType};

use serde::{Deserialize, Serialize};

/// Feed projection. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ActivityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
}

impl ActivityFilter {
    pub fn unread() -> Self {
        Self {
            read: Some(false),
            ..Self::default()
        }
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        self.kind.is_none_or(|kind| activity.kind == kind)
            && self.read.is_none_or(|read| activity.read == read)
            && self
                .board_id
                .as_deref()
                .is_none_or(|id| activity.board_id.as_deref() == Some(id))
    }

    /// Keep matching activities, preserving order
    pub fn apply(&self, activities: Vec<Activity>) -> Vec<Activity> {
        activities.into_iter().filter(|a| self.matches(a)).collect()
    }
}
