//! Materialized trending cache configuration types

use std::time::Duration;

use mcc_application::ports::registry::TrendingStoreConfig;
use mcc_domain::constants::{
    DEFAULT_TRENDING_TYPE, TRENDING_COLLECTION, TRENDING_S_MAXAGE_SECS,
    TRENDING_STALE_WHILE_REVALIDATE_SECS,
};
use mcc_providers::constants::POSTGRES_DEFAULT_POOL_SIZE;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TRENDING_LOOKUP_TIMEOUT_SECS, DEFAULT_TRENDING_PROVIDER};

/// Trending read path configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingConfig {
    /// Trending store name (memory, postgres)
    pub provider: String,
    /// Category served when the request names none
    pub default_type: String,
    /// Connection URL for the postgres store
    pub database_url: Option<String>,
    /// Table holding trending records
    pub table: String,
    /// Maximum pooled connections
    pub pool_size: u32,
    /// Bound on a single lookup
    pub lookup_timeout_secs: u64,
    /// `s-maxage` sent with populated responses
    pub s_maxage_secs: u64,
    /// `stale-while-revalidate` sent with populated responses
    pub stale_while_revalidate_secs: u64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_TRENDING_PROVIDER.to_string(),
            default_type: DEFAULT_TRENDING_TYPE.to_string(),
            database_url: None,
            table: TRENDING_COLLECTION.to_string(),
            pool_size: POSTGRES_DEFAULT_POOL_SIZE,
            lookup_timeout_secs: DEFAULT_TRENDING_LOOKUP_TIMEOUT_SECS,
            s_maxage_secs: TRENDING_S_MAXAGE_SECS,
            stale_while_revalidate_secs: TRENDING_STALE_WHILE_REVALIDATE_SECS,
        }
    }
}

impl TrendingConfig {
    /// Registry config for the selected store
    pub fn store_config(&self) -> TrendingStoreConfig {
        let config = TrendingStoreConfig::new(&self.provider)
            .with_table(&self.table)
            .with_pool_size(self.pool_size);
        match &self.database_url {
            Some(url) => config.with_database_url(url),
            None => config,
        }
    }

    /// Lookup bound, `None` when unbounded
    pub fn lookup_timeout(&self) -> Option<Duration> {
        (self.lookup_timeout_secs > 0).then(|| Duration::from_secs(self.lookup_timeout_secs))
    }

    /// `Cache-Control` value for populated responses
    pub fn cache_control(&self) -> String {
        format!(
            "public, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage_secs, self.stale_while_revalidate_secs
        )
    }
}
