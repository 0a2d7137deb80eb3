use serde::Deserialize;

/// Body of POST .../cards/{cardId}/move
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveCardRequest {
    pub destination_column_id: Option<String>,
    /// Position in the destination column; appended when absent
    pub index: Option<usize>,
}
