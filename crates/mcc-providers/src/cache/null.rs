//! Null cache store
//!
//! Accepts every write and returns nothing. Selecting it turns the
//! read-through cache into a plain pass-through to the upstream.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mcc_domain::error::Result;
use mcc_domain::ports::CacheStore;
use mcc_domain::value_objects::{CacheEntry, CacheStats};

/// Cache store that doesn't store anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheStore;

impl NullCacheStore {
    /// Create a new null store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheStore for NullCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<CacheEntry>> {
        Ok(None)
    }

    async fn set(&self, _entry: CacheEntry) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn invalidate_tag(&self, _tag: &str) -> Result<usize> {
        Ok(0)
    }

    async fn purge_expired(&self, _cutoff: DateTime<Utc>) -> Result<usize> {
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

use mcc_application::ports::registry::{CACHE_STORES, CacheStoreConfig, CacheStoreEntry};

#[linkme::distributed_slice(CACHE_STORES)]
static NULL_STORE: CacheStoreEntry = CacheStoreEntry {
    name: "null",
    description: "Pass-through store that caches nothing",
    factory: |_config: &CacheStoreConfig| Ok(Arc::new(NullCacheStore::new())),
};
