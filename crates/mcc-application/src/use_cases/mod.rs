//! Use cases

pub mod catalog_service;
pub mod trending_service;

pub use catalog_service::{CatalogResponse, CatalogService, CatalogServiceConfig};
pub use trending_service::TrendingService;
