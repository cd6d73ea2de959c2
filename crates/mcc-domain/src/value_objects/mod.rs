//! Value objects

pub mod cache;
pub mod trending;

pub use cache::{CacheEntry, CacheKey, CacheStats, ttl_delta};
pub use trending::{
    MovieSummary, TrendingCacheRecord, TrendingLookup, TrendingResponse, TrendingStatus,
};
