use kb_config::{ApiConfig, ValidationConfig};
use kb_db::{MemoryStore, Repositories};
use kb_service::Services;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub api_config: ApiConfig,
}

impl AppState {
    pub fn new(store: &MemoryStore, api_config: ApiConfig, limits: ValidationConfig) -> Self {
        Self {
            services: Services::new(Repositories::in_memory(store), limits),
            api_config,
        }
    }
}
