//! Cache Store Implementations
//!
//! Backends for the read-through catalog cache.
//!
//! ## Available Stores
//!
//! | Store | Type | Description |
//! |-------|------|-------------|
//! | [`MemoryCacheStore`] | Local | HashMap behind a lock, default |
//! | [`MokaCacheStore`] | Local | Moka concurrent cache with its own TTL eviction |
//! | [`NullCacheStore`] | Testing | Stores nothing; every read is a miss |
//!
//! All stores share [`TagIndex`] for the many-to-many tag mapping.

pub mod memory;
#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
pub mod tags;

pub use memory::MemoryCacheStore;
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheStore;
pub use null::NullCacheStore;
pub use tags::TagIndex;

// Re-export domain types used by cache stores
pub use mcc_domain::value_objects::{CacheEntry, CacheStats};
