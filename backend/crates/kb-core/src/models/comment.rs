use crate::UserSummary;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment attached to an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user: UserSummary,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
