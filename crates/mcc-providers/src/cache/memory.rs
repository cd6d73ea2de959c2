//! In-memory cache store
//!
//! Entries and the tag index share one `RwLock`, so tag invalidation and
//! replacement are atomic with respect to readers.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::CacheStore;
use mcc_domain::value_objects::{CacheEntry, CacheStats};

use super::tags::TagIndex;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    tags: TagIndex,
}

impl Inner {
    fn remove(&mut self, key: &str) -> bool {
        self.tags.remove_key(key);
        self.entries.remove(key).is_some()
    }
}

/// In-memory cache store
///
/// Unbounded: entries leave only through tag invalidation, deletion or an
/// expiry sweep.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    inner: RwLock<Inner>,
}

impl MemoryCacheStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.read().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| Error::cache("memory cache lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| Error::cache("memory cache lock poisoned"))
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        Ok(self.read()?.entries.get(key).cloned())
    }

    async fn set(&self, entry: CacheEntry) -> Result<()> {
        let mut inner = self.write()?;
        inner.tags.insert(&entry.key, &entry.tags);
        inner.entries.insert(entry.key.clone(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.write()?.remove(key))
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<usize> {
        let mut inner = self.write()?;
        let mut purged = 0;
        for key in inner.tags.take_tag(tag) {
            if inner.entries.remove(&key).is_some() {
                purged += 1;
            }
        }
        Ok(purged)
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut inner = self.write()?;
        let expired: Vec<String> = inner
            .entries
            .values()
            .filter(|entry| entry.created_at < cutoff)
            .map(|entry| entry.key.clone())
            .collect();

        for key in &expired {
            inner.remove(key);
        }
        Ok(expired.len())
    }

    async fn clear(&self) -> Result<()> {
        let mut inner = self.write()?;
        inner.entries.clear();
        inner.tags.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let inner = self.read()?;
        Ok(CacheStats {
            entries: inner.entries.len() as u64,
            tags: inner.tags.tag_count() as u64,
            ..CacheStats::new()
        })
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use mcc_application::ports::registry::{CACHE_STORES, CacheStoreConfig, CacheStoreEntry};

#[linkme::distributed_slice(CACHE_STORES)]
static MEMORY_STORE: CacheStoreEntry = CacheStoreEntry {
    name: "memory",
    description: "Unbounded in-memory store with tag index",
    factory: |_config: &CacheStoreConfig| Ok(Arc::new(MemoryCacheStore::new())),
};
