use serde::{Deserialize, Serialize};

/// File attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Display date as supplied by the uploader
    #[serde(default)]
    pub date: String,
}
