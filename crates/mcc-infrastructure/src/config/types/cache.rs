//! Read-through cache configuration types

use std::time::Duration;

use mcc_application::ports::registry::CacheStoreConfig;
use mcc_application::use_cases::CatalogServiceConfig;
use mcc_domain::constants::{CATALOG_TAG, DEFAULT_CATALOG_TTL_SECS};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_PROVIDER, DEFAULT_SWEEP_INTERVAL_SECS};

/// Read-through cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache store name (memory, moka, null)
    pub provider: String,
    /// Entry TTL in seconds
    pub ttl_secs: u64,
    /// Coalesce concurrent misses on the same key
    pub single_flight: bool,
    /// Seconds between expiry sweeps, 0 disables the sweeper
    pub sweep_interval_secs: u64,
    /// Tags attached to every stored response
    pub default_tags: Vec<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            ttl_secs: DEFAULT_CATALOG_TTL_SECS,
            single_flight: true,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            default_tags: vec![CATALOG_TAG.to_string()],
        }
    }
}

impl CacheConfig {
    /// Entry TTL
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Sweep interval, `None` when sweeping is disabled
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }

    /// Registry config for the selected store
    pub fn store_config(&self) -> CacheStoreConfig {
        CacheStoreConfig::new(&self.provider).with_ttl_secs(self.ttl_secs)
    }

    /// Read-through service settings
    pub fn service_config(&self, fetch_timeout: Duration) -> CatalogServiceConfig {
        CatalogServiceConfig::default()
            .with_ttl(self.ttl())
            .with_fetch_timeout(fetch_timeout)
            .with_single_flight(self.single_flight)
            .with_default_tags(self.default_tags.iter().cloned())
    }
}
