use crate::{ConfigError, ConfigErrorResult};

use std::path::Path;

use serde::Deserialize;

/// How the in-memory store is populated at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the built-in demo boards, collections, users and activities
    pub seed_demo_data: bool,
    /// JSON snapshot to load instead of the demo data, relative to the
    /// config directory unless absolute
    pub seed_file: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            seed_file: None,
        }
    }
}

impl StoreConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if let Some(seed_file) = &self.seed_file {
            let path = config_dir.join(seed_file);
            if !path.is_file() {
                return Err(ConfigError::store(format!(
                    "store.seed_file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
