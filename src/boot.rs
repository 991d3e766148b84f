//! Process bootstrap
//!
//! Boot sequence:
//! 1. Install the JSON log subscriber
//! 2. Resolve configuration (defaults + `PORT`)
//! 3. Load the catalog file into a [`Store`]
//! 4. Serve until SIGINT/SIGTERM

use std::io;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::http_server::{ConfigError, HttpServer, HttpServerConfig};
use crate::observability;
use crate::store::{Store, StoreError};

/// Result type for bootstrap
pub type BootResult<T> = Result<T, BootError>;

/// Startup failures. All are fatal.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open catalog: {0}")]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

/// Runs the service with configuration taken from the environment.
pub async fn run() -> BootResult<()> {
    observability::init_logging();
    let config = HttpServerConfig::from_env()?;
    serve(config).await
}

/// Opens the catalog named by `config` and serves it.
pub async fn serve(config: HttpServerConfig) -> BootResult<()> {
    let store = Arc::new(Store::open(&config.database_path)?);
    info!(
        addr = %config.socket_addr(),
        database = %store.path().display(),
        "starting catalog service"
    );

    HttpServer::with_config(config, store).start().await?;
    Ok(())
}
