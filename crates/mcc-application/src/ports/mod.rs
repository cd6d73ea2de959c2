//! Application ports
//!
//! Provider traits live in `mcc_domain::ports`; this module re-exports them
//! next to the registries that resolve their implementations by name.

pub mod registry;

pub use mcc_domain::ports::{CacheStore, CatalogFetcher, Clock, TrendingStore};
