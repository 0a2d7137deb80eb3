use serde::Deserialize;

/// Body of POST /api/activities/{id}/comments
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddCommentRequest {
    pub text: String,
}
