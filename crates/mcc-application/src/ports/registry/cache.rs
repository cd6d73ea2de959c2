//! Cache Store Registry
//!
//! Auto-registration system for cache stores using linkme distributed slices.
//! Stores register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ports::CacheStore;

/// Configuration for cache store creation
///
/// Contains all configuration options that a cache store might need.
/// Stores should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CacheStoreConfig {
    /// Store name (e.g., "memory", "moka", "null")
    pub provider: String,
    /// Entry TTL in seconds, for stores that expire entries on their own
    pub ttl_secs: Option<u64>,
    /// Additional store-specific configuration
    pub extra: HashMap<String, String>,
}

impl CacheStoreConfig {
    /// Create a new config with the given store name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = Some(ttl_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for cache stores
///
/// Each store implementation registers itself with this entry using
/// `#[linkme::distributed_slice(CACHE_STORES)]`.
pub struct CacheStoreEntry {
    /// Unique store name (e.g., "memory", "moka", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create store instance
    pub factory: fn(&CacheStoreConfig) -> Result<Arc<dyn CacheStore>, String>,
}

// Auto-collection via linkme distributed slices - stores submit entries at compile time
#[linkme::distributed_slice]
pub static CACHE_STORES: [CacheStoreEntry] = [..];

/// Resolve cache store by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn CacheStore>)` - Created store instance
/// * `Err(String)` - Error message if store not found or creation failed
///
/// # Example
///
/// ```ignore
/// let config = CacheStoreConfig::new("memory");
/// let store = resolve_cache_store(&config)?;
/// ```
pub fn resolve_cache_store(config: &CacheStoreConfig) -> Result<Arc<dyn CacheStore>, String> {
    let provider_name = &config.provider;

    for entry in CACHE_STORES {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CACHE_STORES.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown cache store '{provider_name}'. Available stores: {available:?}"
    ))
}

/// List all registered cache stores as (name, description) tuples
pub fn list_cache_stores() -> Vec<(&'static str, &'static str)> {
    CACHE_STORES
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
