//! Trending Store Registry
//!
//! Auto-registration system for trending record stores using linkme
//! distributed slices.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::TrendingStore;

/// Configuration for trending store creation
#[derive(Debug, Clone, Default)]
pub struct TrendingStoreConfig {
    /// Store name (e.g., "memory", "postgres")
    pub provider: String,
    /// Connection URL for database-backed stores
    pub database_url: Option<String>,
    /// Table or collection holding the records
    pub table: Option<String>,
    /// Maximum pooled connections
    pub pool_size: Option<u32>,
    /// Additional store-specific configuration
    pub extra: HashMap<String, String>,
}

impl TrendingStoreConfig {
    /// Create a new config with the given store name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the database URL
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the table name
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the connection pool size
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = Some(pool_size);
        self
    }
}

/// Registry entry for trending stores
pub struct TrendingStoreEntry {
    /// Unique store name (e.g., "memory", "postgres")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create store instance
    pub factory: fn(&TrendingStoreConfig) -> Result<Arc<dyn TrendingStore>, String>,
}

#[linkme::distributed_slice]
pub static TRENDING_STORES: [TrendingStoreEntry] = [..];

/// Resolve trending store by name from registry
pub fn resolve_trending_store(
    config: &TrendingStoreConfig,
) -> Result<Arc<dyn TrendingStore>, String> {
    let provider_name = &config.provider;

    for entry in TRENDING_STORES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = TRENDING_STORES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown trending store '{provider_name}'. Available stores: {available:?}"
    ))
}

/// List all registered trending stores as (name, description) tuples
pub fn list_trending_stores() -> Vec<(&'static str, &'static str)> {
    TRENDING_STORES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
