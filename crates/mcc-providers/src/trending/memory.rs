//! In-memory trending store
//!
//! Holds at most one record per category type. [`upsert`] replaces the
//! record, mirroring how the external refresh job overwrites it.
//!
//! [`upsert`]: MemoryTrendingStore::upsert

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use mcc_domain::error::Result;
use mcc_domain::ports::TrendingStore;
use mcc_domain::value_objects::TrendingCacheRecord;

/// In-memory trending store
#[derive(Debug, Default)]
pub struct MemoryTrendingStore {
    records: RwLock<HashMap<String, TrendingCacheRecord>>,
}

impl MemoryTrendingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = TrendingCacheRecord>,
    {
        let store = Self::new();
        for record in records {
            store.upsert(record);
        }
        store
    }

    /// Insert or replace the record for its category type
    pub fn upsert(&self, record: TrendingCacheRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.category_type.clone(), record);
    }

    /// Number of category types with a record
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no record has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TrendingStore for MemoryTrendingStore {
    async fn find_by_type(&self, category_type: &str) -> Result<Option<TrendingCacheRecord>> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(category_type)
            .cloned())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

use mcc_application::ports::registry::{TRENDING_STORES, TrendingStoreConfig, TrendingStoreEntry};

#[linkme::distributed_slice(TRENDING_STORES)]
static MEMORY_TRENDING_STORE: TrendingStoreEntry = TrendingStoreEntry {
    name: "memory",
    description: "In-process trending records",
    factory: |_config: &TrendingStoreConfig| Ok(Arc::new(MemoryTrendingStore::new())),
};
