use kb_server::error::Result as ServerErrorResult;
use kb_server::{AppState, build_router, logger};

use kb_db::MemoryStore;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Development overrides from .env, if present
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = kb_config::Config::load()?;
    config.validate()?;

    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = kb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting kb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = match config.seed_file_path()? {
        Some(path) => {
            info!("Loading seed file: {}", path.display());
            MemoryStore::load_seed_file(&path).await?
        }
        None if config.store.seed_demo_data => {
            info!("Seeding demo data");
            MemoryStore::with_demo_data()
        }
        None => {
            info!("Starting with an empty store");
            MemoryStore::new()
        }
    };

    let app_state = AppState::new(&store, config.api.clone(), config.validation.clone());
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
