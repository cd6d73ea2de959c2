//! Provider ports

pub mod cache;
pub mod catalog;
pub mod trending;

pub use cache::CacheStore;
pub use catalog::CatalogFetcher;
pub use trending::TrendingStore;
