//! Trending Store Port
//!
//! Read-only view of the materialized trending collection. Records are
//! written by an external periodic job; nothing in this workspace writes
//! through this port.

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::TrendingCacheRecord;

/// Trending record store
#[async_trait]
pub trait TrendingStore: Send + Sync + std::fmt::Debug {
    /// Find the current record for a category type
    ///
    /// # Returns
    /// `Ok(None)` when no record has been written yet, or
    /// [`Error::StorageUnavailable`](crate::error::Error::StorageUnavailable)
    /// when the backing store cannot be read
    async fn find_by_type(&self, category_type: &str) -> Result<Option<TrendingCacheRecord>>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
