//! # Movie Catalog Cache - Application Layer
//!
//! Use cases that compose the domain ports into the catalog read path:
//!
//! - [`use_cases::CatalogService`]: read-through TTL cache over the upstream
//!   catalog API, with tag invalidation and per-key single-flight
//! - [`use_cases::TrendingService`]: read path of the materialized trending
//!   cache, absorbing every failure into a well-formed response
//!
//! Provider registries ([`ports::registry`]) let adapters in `mcc-providers`
//! register themselves at link time.

pub mod ports;
pub mod single_flight;
pub mod use_cases;

pub use single_flight::KeyedLocks;
pub use use_cases::{CatalogResponse, CatalogService, CatalogServiceConfig, TrendingService};
