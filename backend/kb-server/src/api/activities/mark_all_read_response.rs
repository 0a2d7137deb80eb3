use serde::Serialize;

/// Result of POST /api/activities/read-all
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAllReadResponse {
    /// Activities that were unread before the call
    pub updated: usize,
}
