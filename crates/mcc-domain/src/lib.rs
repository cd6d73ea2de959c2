//! # Movie Catalog Cache - Domain Layer
//!
//! Core types and contracts for the catalog read path of the streaming site.
//! This crate has no knowledge of HTTP frameworks, databases or cache engines;
//! it only defines what the rest of the workspace talks about.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Defaults shared across layers (TTL, category, cache directives) |
//! | [`value_objects`] | Cache entries, cache keys, trending records and responses |
//! | [`ports`] | Traits implemented by providers (`CacheStore`, `CatalogFetcher`, `TrendingStore`, `Clock`) |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
