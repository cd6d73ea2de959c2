//! Bootstrap
//!
//! Builds the application services from [`AppConfig`]. Cache and trending
//! stores are resolved by name through the linkme registries; the upstream
//! fetcher and the clock are fixed.
//!
//! ```text
//! AppConfig → registries (CACHE_STORES, TRENDING_STORES) → stores
//!           → HttpCatalogFetcher, SystemClock
//!           → CatalogService, TrendingService → AppContext
//! ```

use std::sync::Arc;

use mcc_application::ports::registry::{resolve_cache_store, resolve_trending_store};
use mcc_application::use_cases::{CatalogService, TrendingService};
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::Clock;
use mcc_providers::catalog::HttpCatalogFetcher;
use mcc_providers::clock::SystemClock;
use tracing::info;

use crate::config::AppConfig;

/// Application context: configuration plus the services built from it
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    catalog: Arc<CatalogService>,
    trending: Arc<TrendingService>,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Assemble a context from already-built services
    pub fn new(
        config: AppConfig,
        catalog: Arc<CatalogService>,
        trending: Arc<TrendingService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            trending,
            clock,
        }
    }

    /// Read-through catalog service
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    /// Trending read service
    pub fn trending(&self) -> Arc<TrendingService> {
        Arc::clone(&self.trending)
    }

    /// Clock shared by the services
    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());

    let store = resolve_cache_store(&config.cache.store_config()).map_err(Error::configuration)?;
    let fetcher = Arc::new(HttpCatalogFetcher::from_config(
        &config.catalog.base_url,
        config.catalog.fetch_timeout(),
        &config.catalog.user_agent,
    )?);
    let catalog = Arc::new(CatalogService::new(
        store,
        fetcher,
        Arc::clone(&clock),
        config.cache.service_config(config.catalog.fetch_timeout()),
    ));

    let trending_store =
        resolve_trending_store(&config.trending.store_config()).map_err(Error::configuration)?;
    let mut trending = TrendingService::new(trending_store, &config.trending.default_type);
    if let Some(timeout) = config.trending.lookup_timeout() {
        trending = trending.with_timeout(timeout);
    }

    info!(
        cache_store = catalog.store_name(),
        ttl_secs = config.cache.ttl_secs,
        single_flight = config.cache.single_flight,
        trending_store = config.trending.provider.as_str(),
        base_url = config.catalog.base_url.as_str(),
        "Application context initialized"
    );

    Ok(AppContext::new(
        config,
        catalog,
        Arc::new(trending),
        clock,
    ))
}
