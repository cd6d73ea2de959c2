//! Server Initialization
//!
//! Loads configuration, installs logging, builds the application context,
//! starts the TTL sweeper and launches Rocket. The sweeper is cancelled once
//! Rocket shuts down (Ctrl+C or SIGTERM).

use std::path::Path;

use mcc_infrastructure::cache::spawn_ttl_sweeper;
use mcc_infrastructure::config::{AppConfig, ConfigLoader};
use mcc_infrastructure::logging::init_logging;
use mcc_infrastructure::init_app;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::routes::build_rocket;

/// Run the Movie Catalog Cache server
///
/// # Arguments
/// * `config_path` - Explicit TOML file; when `None` the default search
///   paths are used and a missing file is not an error
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        cache_store = %config.cache.provider,
        trending_store = %config.trending.provider,
        "Starting Movie Catalog Cache server"
    );

    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port));
    let sweep_interval = config.cache.sweep_interval();

    let context = init_app(config)?;

    let shutdown = CancellationToken::new();
    let sweeper = sweep_interval
        .and_then(|every| spawn_ttl_sweeper(context.catalog(), every, shutdown.clone()));

    let launched = build_rocket(context).configure(figment).launch().await;

    shutdown.cancel();
    if let Some(handle) = sweeper
        && let Err(e) = handle.await
    {
        warn!(error = %e, "TTL sweeper ended abnormally");
    }

    launched?;
    info!("Server stopped");
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
