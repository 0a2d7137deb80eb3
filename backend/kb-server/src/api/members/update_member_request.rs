use kb_core::UserRole;

use serde::Deserialize;

/// Body of PATCH /api/boards/{id}/members/{memberId}
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub role: UserRole,
}
