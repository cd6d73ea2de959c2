//! Root configuration

use serde::{Deserialize, Serialize};

use super::{
    AdminConfig, CacheConfig, CatalogConfig, LoggingConfig, ServerConfig, TrendingConfig,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server
    pub server: ServerConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Upstream catalog API
    pub catalog: CatalogConfig,
    /// Read-through cache
    pub cache: CacheConfig,
    /// Materialized trending cache
    pub trending: TrendingConfig,
    /// Administrative endpoints
    pub admin: AdminConfig,
}
