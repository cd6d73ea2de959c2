//! # Movie Catalog Cache - Provider Implementations
//!
//! Adapters for the ports defined in `mcc-domain`. Stores register
//! themselves in the linkme registries declared by `mcc-application`, so
//! linking this crate is enough to make them resolvable by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache store | `CacheStore` | Memory, Moka, Null |
//! | Catalog fetcher | `CatalogFetcher` | HTTP (reqwest) |
//! | Trending store | `TrendingStore` | Memory, Postgres |
//! | Clock | `Clock` | System, Manual |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! mcc-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```

// Re-export mcc-domain types commonly used with providers
pub use mcc_domain::error::{Error, Result};
pub use mcc_domain::ports::{CacheStore, CatalogFetcher, Clock, TrendingStore};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Cache store implementations
pub mod cache;

/// Upstream catalog fetchers
pub mod catalog;

/// Trending record stores
pub mod trending;

/// Clock implementations
pub mod clock;
