//! Upstream catalog fetchers

pub mod http;

pub use http::HttpCatalogFetcher;
