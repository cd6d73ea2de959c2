//! Provider Registry
//!
//! Compile-time provider registration using linkme distributed slices.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  1. Registry declares: #[linkme::distributed_slice]          │
//! │     pub static CACHE_STORES: [CacheStoreEntry] = [..];       │
//! │  2. Provider submits:  #[linkme::distributed_slice(...)]     │
//! │     static MEMORY_STORE: CacheStoreEntry = ...;              │
//! │  3. Bootstrap resolves by configured name at startup         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod trending;

pub use cache::{
    CACHE_STORES, CacheStoreConfig, CacheStoreEntry, list_cache_stores, resolve_cache_store,
};
pub use trending::{
    TRENDING_STORES, TrendingStoreConfig, TrendingStoreEntry, list_trending_stores,
    resolve_trending_store,
};
