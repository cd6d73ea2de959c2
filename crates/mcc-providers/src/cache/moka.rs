//! Moka cache store
//!
//! Concurrent in-memory store backed by Moka. When a TTL is configured Moka
//! expires entries on its own; the tag index is pruned of those keys on the
//! next sweep or stats call.
//!
//! ## Example
//!
//! ```ignore
//! use mcc_providers::cache::MokaCacheStore;
//! use std::time::Duration;
//!
//! let store = MokaCacheStore::with_ttl(Duration::from_secs(3600));
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mcc_domain::error::Result;
use mcc_domain::ports::CacheStore;
use mcc_domain::value_objects::{CacheEntry, CacheStats};
use moka::future::Cache;
use tokio::sync::Mutex;

use super::tags::TagIndex;

/// Moka-based cache store
///
/// Every write to the cache happens while the tag index lock is held, so an
/// entry is never visible in the cache without its tags.
#[derive(Clone)]
pub struct MokaCacheStore {
    cache: Cache<String, CacheEntry>,
    tags: Arc<Mutex<TagIndex>>,
    time_to_live: Option<Duration>,
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheStore {
    /// Create a store without Moka-side expiry
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Create a store whose entries Moka drops `time_to_live` after insertion
    pub fn with_ttl(time_to_live: Duration) -> Self {
        Self::build(Some(time_to_live))
    }

    fn build(time_to_live: Option<Duration>) -> Self {
        let mut builder = Cache::builder();
        if let Some(ttl) = time_to_live {
            builder = builder.time_to_live(ttl);
        }

        Self {
            cache: builder.build(),
            tags: Arc::new(Mutex::new(TagIndex::new())),
            time_to_live,
        }
    }

    /// Moka-side TTL, if any
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live
    }

    fn prune_tags(&self, tags: &mut TagIndex) -> usize {
        tags.retain_keys(|key| self.cache.contains_key(key));
        tags.tag_count()
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>> {
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, entry: CacheEntry) -> Result<()> {
        let mut tags = self.tags.lock().await;
        tags.insert(&entry.key, &entry.tags);
        self.cache.insert(entry.key.clone(), entry).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut tags = self.tags.lock().await;
        tags.remove_key(key);
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn invalidate_tag(&self, tag: &str) -> Result<usize> {
        let mut tags = self.tags.lock().await;
        let keys = tags.take_tag(tag);

        let mut purged = 0;
        for key in keys {
            if self.cache.remove(&key).await.is_some() {
                purged += 1;
            }
        }
        Ok(purged)
    }

    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize> {
        let mut tags = self.tags.lock().await;
        let expired: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, entry)| entry.created_at < cutoff)
            .map(|(key, _)| String::clone(&key))
            .collect();

        let mut purged = 0;
        for key in &expired {
            if self.cache.remove(key).await.is_some() {
                purged += 1;
            }
        }

        self.cache.run_pending_tasks().await;
        self.prune_tags(&mut tags);
        Ok(purged)
    }

    async fn clear(&self) -> Result<()> {
        let mut tags = self.tags.lock().await;
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        tags.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let mut tags = self.tags.lock().await;
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        let tag_count = self.prune_tags(&mut tags);

        Ok(CacheStats {
            entries: self.cache.entry_count(),
            tags: tag_count as u64,
            ..CacheStats::new()
        })
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheStore")
            .field("time_to_live", &self.time_to_live)
            .field("entries", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use mcc_application::ports::registry::{CACHE_STORES, CacheStoreConfig, CacheStoreEntry};

#[linkme::distributed_slice(CACHE_STORES)]
static MOKA_STORE: CacheStoreEntry = CacheStoreEntry {
    name: "moka",
    description: "Moka concurrent in-memory cache with TTL eviction",
    factory: |config: &CacheStoreConfig| {
        let store = match config.ttl_secs {
            Some(secs) if secs > 0 => MokaCacheStore::with_ttl(Duration::from_secs(secs)),
            _ => MokaCacheStore::new(),
        };
        Ok(Arc::new(store))
    },
};
