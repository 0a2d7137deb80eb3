use crate::{Attachment, CountedList, Label, UserSummary};

use serde::{Deserialize, Serialize};

/// A task card. Owned by exactly one column at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub members: Vec<UserSummary>,
    #[serde(default)]
    pub attachments: CountedList<Attachment>,
    /// Number of comments on the card
    #[serde(default)]
    pub comments: u32,
    /// Back-reference to the owning column
    #[serde(default)]
    pub column_id: String,
}
