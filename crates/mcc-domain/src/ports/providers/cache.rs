//! Cache Store Port
//!
//! Port for the key-scoped store behind the read-through cache. Supports an
//! in-memory store, a Moka-backed store and a null store that disables
//! caching.
//!
//! ## Contract
//!
//! - At most one entry per key; `set` replaces any previous entry and its
//!   tag memberships.
//! - Tags form a many-to-many mapping with keys. Removing an entry by any
//!   path removes it from every tag it belonged to.
//! - `invalidate_tag` on a tag with no live entries is a no-op returning 0.
//! - Stores do not judge freshness; the caller compares
//!   [`CacheEntry::created_at`] with its own clock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::value_objects::{CacheEntry, CacheStats};

/// Cache Store Port
///
/// # Example
///
/// ```ignore
/// use mcc_domain::ports::providers::CacheStore;
/// use mcc_domain::value_objects::CacheEntry;
///
/// let entry = CacheEntry::new("danh-sach/phim-moi", body, now).with_tags(["catalog"]);
/// store.set(entry).await?;
///
/// let purged = store.invalidate_tag("catalog").await?;
/// ```
#[async_trait]
pub trait CacheStore: Send + Sync + std::fmt::Debug {
    /// Get the entry stored under `key`, fresh or not
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>>;

    /// Store an entry, replacing any entry under the same key
    async fn set(&self, entry: CacheEntry) -> Result<()>;

    /// Delete one entry
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Remove every entry carrying `tag`
    ///
    /// # Returns
    /// Number of entries removed
    async fn invalidate_tag(&self, tag: &str) -> Result<usize>;

    /// Remove every entry created before `cutoff`
    ///
    /// # Returns
    /// Number of entries removed
    async fn purge_expired(&self, cutoff: DateTime<Utc>) -> Result<usize>;

    /// Clear all entries and tags
    async fn clear(&self) -> Result<()>;

    /// Entry and tag counts
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
