//! HTTP Catalog Fetcher
//!
//! Implements the `CatalogFetcher` port with a plain `GET` against the
//! upstream movie-catalog API.

use std::time::Duration;

use async_trait::async_trait;
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::CatalogFetcher;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::constants::{CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT};
use crate::utils::HttpResponseUtils;

/// Upstream catalog fetcher over HTTP
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use mcc_providers::catalog::HttpCatalogFetcher;
/// use std::time::Duration;
///
/// fn example() -> mcc_domain::Result<()> {
///     let fetcher = HttpCatalogFetcher::from_config(
///         "https://phimapi.com",
///         Duration::from_secs(10),
///         "mcc/0.1",
///     )?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
    base_url: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpCatalogFetcher {
    /// Create a fetcher around an existing client
    ///
    /// # Arguments
    /// * `base_url` - Upstream API root (e.g., "https://phimapi.com")
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest client used for every request
    pub fn new(base_url: impl Into<String>, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            http_client,
        }
    }

    /// Create a fetcher with its own client
    pub fn from_config(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::configuration_with_source("Failed to build HTTP client", e))?;

        Ok(Self::new(base_url, timeout, http_client))
    }

    /// Full URL for an endpoint key
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch(&self, endpoint: &str) -> Result<serde_json::Value> {
        let url = self.endpoint_url(endpoint);
        debug!(endpoint = %endpoint, url = %url, "Fetching upstream catalog");

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::fetch(
                        endpoint,
                        format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout),
                    )
                } else {
                    Error::fetch(endpoint, format!("HTTP request failed: {e}"))
                }
            })?;

        HttpResponseUtils::check_and_parse(response, endpoint).await
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
