//! Trending read path
//!
//! Reads the latest materialized record for a category type. Every outcome
//! is a well-formed [`TrendingResponse`]: a missing record is an empty list,
//! and a store failure is an empty list carrying an error flag. This path
//! never writes.

use std::sync::Arc;
use std::time::Duration;

use mcc_domain::constants::{DEFAULT_TRENDING_TYPE, TRENDING_ERROR_STORAGE_UNAVAILABLE};
use mcc_domain::ports::TrendingStore;
use mcc_domain::value_objects::{TrendingLookup, TrendingResponse, TrendingStatus};
use tracing::{debug, error};

/// Read path of the materialized trending cache
#[derive(Debug, Clone)]
pub struct TrendingService {
    store: Arc<dyn TrendingStore>,
    default_type: String,
    timeout: Option<Duration>,
}

impl TrendingService {
    /// Create a service that falls back to `default_type`
    ///
    /// A blank `default_type` falls back to `phim-bo`.
    pub fn new(store: Arc<dyn TrendingStore>, default_type: impl Into<String>) -> Self {
        let default_type = default_type.into();
        let default_type = if default_type.trim().is_empty() {
            DEFAULT_TRENDING_TYPE.to_string()
        } else {
            default_type.trim().to_string()
        };

        Self {
            store,
            default_type,
            timeout: None,
        }
    }

    /// Bound each store lookup; exceeding it counts as storage unavailable
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Category served when the caller names none
    pub fn default_type(&self) -> &str {
        &self.default_type
    }

    /// Resolve the requested category type
    pub fn resolve_type<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.default_type)
    }

    /// Look up the current trending record for a category type
    pub async fn get_trending(&self, requested: Option<&str>) -> TrendingLookup {
        let category_type = self.resolve_type(requested).to_string();

        let found = match self.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.store.find_by_type(&category_type)).await {
                    Ok(found) => found,
                    Err(_) => Err(mcc_domain::Error::storage(format!(
                        "trending lookup timed out after {limit:?}"
                    ))),
                }
            }
            None => self.store.find_by_type(&category_type).await,
        };

        let (status, response) = match found {
            Ok(Some(record)) => {
                debug!(category_type = %category_type, movies = record.movies.len(), "Trending record served");
                (TrendingStatus::Populated, TrendingResponse::from(record))
            }
            Ok(None) => {
                debug!(category_type = %category_type, "Trending record not yet populated");
                (TrendingStatus::NotYetPopulated, TrendingResponse::empty())
            }
            Err(e) => {
                error!(
                    category_type = %category_type,
                    store = self.store.provider_name(),
                    error = %e,
                    "Trending lookup failed"
                );
                (
                    TrendingStatus::StorageUnavailable,
                    TrendingResponse::failed(TRENDING_ERROR_STORAGE_UNAVAILABLE),
                )
            }
        };

        TrendingLookup {
            category_type,
            status,
            response,
        }
    }
}
