//! Upstream catalog configuration types

use std::time::Duration;

use mcc_domain::constants::DEFAULT_FETCH_TIMEOUT_SECS;
use mcc_providers::constants::DEFAULT_CATALOG_BASE_URL;
use serde::{Deserialize, Serialize};

/// Upstream catalog API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API root; endpoint keys are appended after a `/`
    pub base_url: String,
    /// Bound on a single upstream request
    pub fetch_timeout_secs: u64,
    /// User-Agent sent upstream
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: format!("mcc/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CatalogConfig {
    /// Fetch timeout as a duration
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
