use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_USER_ID: &str = "user-1";
pub const DEFAULT_USER_NAME: &str = "Demo User";
pub const DEFAULT_USER_INITIALS: &str = "DU";

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Acting user when a request carries no `X-User-Id` header
    pub default_user_id: String,
    pub default_user_name: String,
    pub default_user_initials: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_user_id: DEFAULT_USER_ID.to_string(),
            default_user_name: DEFAULT_USER_NAME.to_string(),
            default_user_initials: DEFAULT_USER_INITIALS.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_user_id.trim().is_empty() {
            return Err(ConfigError::api("api.default_user_id must not be empty"));
        }
        if self.default_user_name.trim().is_empty() {
            return Err(ConfigError::api("api.default_user_name must not be empty"));
        }
        Ok(())
    }
}
