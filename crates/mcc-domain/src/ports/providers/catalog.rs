//! Catalog Fetcher Port
//!
//! Port for the upstream movie-catalog API. Implementations perform a single
//! `GET {base_url}/{endpoint}` and decode the JSON body.

use async_trait::async_trait;

use crate::error::Result;

/// Upstream catalog fetcher
///
/// Every failure, including a non-success status, a transport error, a
/// timeout or an undecodable body, must be reported as
/// [`Error::FetchFailure`](crate::error::Error::FetchFailure).
#[async_trait]
pub trait CatalogFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch the JSON body of an endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Normalized endpoint key, without a leading slash
    async fn fetch(&self, endpoint: &str) -> Result<serde_json::Value>;

    /// Base URL requests are issued against
    fn base_url(&self) -> &str;
}
