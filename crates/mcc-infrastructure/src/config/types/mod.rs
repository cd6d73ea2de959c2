//! Configuration types, one file per section

pub mod admin;
pub mod app;
pub mod cache;
pub mod catalog;
pub mod logging;
pub mod server;
pub mod trending;

pub use admin::AdminConfig;
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use trending::TrendingConfig;
