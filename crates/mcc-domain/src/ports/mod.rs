//! Ports
//!
//! Contracts implemented by adapters in `mcc-providers` and consumed by the
//! use cases in `mcc-application`.

pub mod infrastructure;
pub mod providers;

pub use infrastructure::Clock;
pub use providers::{CacheStore, CatalogFetcher, TrendingStore};
