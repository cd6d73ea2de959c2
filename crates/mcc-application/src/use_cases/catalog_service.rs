//! Read-through catalog cache
//!
//! Serves upstream catalog responses from a [`CacheStore`], fetching through
//! a [`CatalogFetcher`] when the stored entry is missing or older than the
//! TTL. Time comes from an injected [`Clock`].
//!
//! - Failed fetches are never stored; the key keeps whatever it held before.
//! - Store errors are logged and treated as misses. The cache is an
//!   optimization and must not turn a reachable upstream into an outage.
//! - With single-flight enabled, concurrent misses on one key produce one
//!   upstream fetch; waiters re-read the store when the lock is released.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use mcc_domain::constants::{CATALOG_TAG, DEFAULT_CATALOG_TTL_SECS, DEFAULT_FETCH_TIMEOUT_SECS};
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::{CacheStore, CatalogFetcher, Clock};
use mcc_domain::value_objects::{CacheEntry, CacheKey, CacheStats, ttl_delta};
use tracing::{debug, info, warn};

use crate::single_flight::KeyedLocks;

/// Read-through cache settings
#[derive(Debug, Clone)]
pub struct CatalogServiceConfig {
    /// Age after which an entry is refreshed
    pub ttl: Duration,
    /// Upper bound on a single upstream fetch
    pub fetch_timeout: Duration,
    /// Coalesce concurrent misses on the same key
    pub single_flight: bool,
    /// Tags attached to every stored entry
    pub default_tags: Vec<String>,
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CATALOG_TTL_SECS),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            single_flight: true,
            default_tags: vec![CATALOG_TAG.to_string()],
        }
    }
}

impl CatalogServiceConfig {
    /// Set the TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the fetch timeout
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Enable or disable single-flight
    pub fn with_single_flight(mut self, enabled: bool) -> Self {
        self.single_flight = enabled;
        self
    }

    /// Replace the default tags
    pub fn with_default_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A catalog response and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    /// Upstream response body
    pub value: serde_json::Value,
    /// Whether the body was served from the cache
    pub from_cache: bool,
    /// When the body was fetched from upstream
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    fetches: AtomicU64,
    fetch_failures: AtomicU64,
    coalesced: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Read-through TTL cache over the upstream catalog
#[derive(Debug)]
pub struct CatalogService {
    store: Arc<dyn CacheStore>,
    fetcher: Arc<dyn CatalogFetcher>,
    clock: Arc<dyn Clock>,
    config: CatalogServiceConfig,
    flights: KeyedLocks,
    counters: Counters,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(
        store: Arc<dyn CacheStore>,
        fetcher: Arc<dyn CatalogFetcher>,
        clock: Arc<dyn Clock>,
        config: CatalogServiceConfig,
    ) -> Self {
        Self {
            store,
            fetcher,
            clock,
            config,
            flights: KeyedLocks::new(),
            counters: Counters::default(),
        }
    }

    /// Configured TTL
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Name of the backing store
    pub fn store_name(&self) -> &str {
        self.store.provider_name()
    }

    /// Get the response body for an endpoint key
    pub async fn get(&self, endpoint: &str) -> Result<serde_json::Value> {
        Ok(self.lookup(endpoint).await?.value)
    }

    /// Get the response for an endpoint key, reporting whether it was cached
    pub async fn lookup(&self, endpoint: &str) -> Result<CatalogResponse> {
        self.lookup_tagged(endpoint, &[]).await
    }

    /// Like [`lookup`](Self::lookup), attaching `tags` on top of the defaults
    /// when a fresh response gets stored
    pub async fn lookup_tagged(&self, endpoint: &str, tags: &[&str]) -> Result<CatalogResponse> {
        let key = CacheKey::normalize(endpoint)?;

        if let Some(hit) = self.fresh_entry(&key).await {
            Counters::bump(&self.counters.hits);
            debug!(key = %key, "Catalog cache hit");
            return Ok(hit);
        }

        Counters::bump(&self.counters.misses);
        debug!(key = %key, "Catalog cache miss");

        let tags = self.entry_tags(tags);
        if self.config.single_flight {
            self.flights
                .run(&key, || async {
                    // Another caller may have refreshed the key while we waited.
                    if let Some(hit) = self.fresh_entry(&key).await {
                        Counters::bump(&self.counters.coalesced);
                        debug!(key = %key, "Catalog fetch coalesced");
                        return Ok(hit);
                    }
                    self.fetch_and_store(&key, tags).await
                })
                .await
        } else {
            self.fetch_and_store(&key, tags).await
        }
    }

    /// Remove every entry carrying `tag`
    ///
    /// Idempotent: a tag with no live entries purges nothing.
    pub async fn invalidate(&self, tag: &str) -> Result<usize> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(Error::invalid_argument("Tag cannot be empty"));
        }

        let purged = self.store.invalidate_tag(tag).await?;
        info!(tag = %tag, purged, "Catalog cache tag invalidated");
        Ok(purged)
    }

    /// Remove every entry older than the TTL
    pub async fn sweep_expired(&self) -> Result<usize> {
        let cutoff = self
            .clock
            .now()
            .checked_sub_signed(ttl_delta(self.config.ttl))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let purged = self.store.purge_expired(cutoff).await?;
        if purged > 0 {
            debug!(purged, "Expired catalog entries swept");
        }
        Ok(purged)
    }

    /// Cache statistics: store counts plus this service's counters
    pub async fn stats(&self) -> Result<CacheStats> {
        let mut stats = self.store.stats().await?;
        stats.hits = self.counters.hits.load(Ordering::Relaxed);
        stats.misses = self.counters.misses.load(Ordering::Relaxed);
        stats.fetches = self.counters.fetches.load(Ordering::Relaxed);
        stats.fetch_failures = self.counters.fetch_failures.load(Ordering::Relaxed);
        stats.coalesced = self.counters.coalesced.load(Ordering::Relaxed);
        stats.hit_rate = stats.calculate_hit_rate();
        Ok(stats)
    }

    async fn fresh_entry(&self, key: &str) -> Option<CatalogResponse> {
        let entry = match self.store.get(key).await {
            Ok(entry) => entry?,
            Err(e) => {
                warn!(key = %key, error = %e, "Cache store read failed, treating as miss");
                return None;
            }
        };

        entry
            .is_fresh(self.clock.now(), self.config.ttl)
            .then(|| CatalogResponse {
                value: entry.value,
                from_cache: true,
                fetched_at: entry.created_at,
            })
    }

    async fn fetch_and_store(&self, key: &str, tags: BTreeSet<String>) -> Result<CatalogResponse> {
        Counters::bump(&self.counters.fetches);

        let fetched = tokio::time::timeout(self.config.fetch_timeout, self.fetcher.fetch(key)).await;
        let value = match fetched {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                Counters::bump(&self.counters.fetch_failures);
                warn!(key = %key, error = %e, "Upstream catalog fetch failed");
                return Err(as_fetch_failure(key, e));
            }
            Err(_) => {
                Counters::bump(&self.counters.fetch_failures);
                warn!(key = %key, timeout = ?self.config.fetch_timeout, "Upstream catalog fetch timed out");
                return Err(Error::fetch(
                    key,
                    format!("request timed out after {:?}", self.config.fetch_timeout),
                ));
            }
        };

        let fetched_at = self.clock.now();
        let entry = CacheEntry::new(key, value.clone(), fetched_at).with_tags(tags);
        if let Err(e) = self.store.set(entry).await {
            warn!(key = %key, error = %e, "Failed to store catalog response");
        }

        Ok(CatalogResponse {
            value,
            from_cache: false,
            fetched_at,
        })
    }

    fn entry_tags(&self, extra: &[&str]) -> BTreeSet<String> {
        self.config
            .default_tags
            .iter()
            .map(String::as_str)
            .chain(extra.iter().copied())
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }
}

fn as_fetch_failure(key: &str, error: Error) -> Error {
    if error.is_fetch_failure() {
        error
    } else {
        Error::fetch(key, error.to_string())
    }
}
