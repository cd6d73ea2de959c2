//! # Movie Catalog Cache
//!
//! A read-through TTL cache in front of a movie catalog API, plus a read
//! path for trending lists materialized by an external job.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mcc::application::use_cases::{CatalogService, CatalogServiceConfig};
//! use mcc::providers::{cache::MemoryCacheStore, catalog::HttpCatalogFetcher, clock::SystemClock};
//!
//! let fetcher = HttpCatalogFetcher::from_config("https://phimapi.com", Duration::from_secs(10), "mcc")?;
//! let catalog = CatalogService::new(
//!     Arc::new(MemoryCacheStore::new()),
//!     Arc::new(fetcher),
//!     Arc::new(SystemClock::new()),
//!     CatalogServiceConfig::default(),
//! );
//! let body = catalog.get("danh-sach/phim-moi-cap-nhat").await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, value objects and ports
//! - `application` - Read-through cache, trending reads, provider registries
//! - `providers` - Cache stores, HTTP fetcher, trending stores, clocks
//! - `infrastructure` - Configuration, logging, bootstrap, TTL sweeper
//! - `server` - Rocket routes and startup

/// Domain layer - errors, value objects and ports
pub mod domain {
    pub use mcc_domain::*;
}

/// Application layer - use cases and registries
pub mod application {
    pub use mcc_application::*;
}

/// Provider implementations
pub mod providers {
    pub use mcc_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use mcc_infrastructure::*;
}

/// Server layer - HTTP routes and startup
pub mod server {
    pub use mcc_server::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export main entry point at the crate root
pub use server::run;
