//! Read-through cache value objects
//!
//! [`CacheEntry`] is what the read-through cache stores per endpoint key,
//! [`CacheKey`] normalizes and validates endpoint keys, and [`CacheStats`]
//! reports cache activity.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::CACHE_KEY_MAX_LEN;
use crate::error::{Error, Result};

/// A cached upstream response
///
/// Entries are immutable once written: a refresh replaces the whole entry.
/// Freshness is always judged against an externally supplied `now` so the
/// entry itself never reads a clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Endpoint key the entry is stored under
    pub key: String,
    /// Deserialized upstream response body
    pub value: serde_json::Value,
    /// When the upstream response was stored
    pub created_at: DateTime<Utc>,
    /// Tags used for grouped invalidation
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl CacheEntry {
    /// Create an untagged entry
    pub fn new<K: Into<String>>(key: K, value: serde_json::Value, created_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            value,
            created_at,
            tags: BTreeSet::new(),
        }
    }

    /// Attach tags to the entry
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Whether the entry carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Age of the entry at `now`
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.created_at)
    }

    /// Whether the entry is younger than `ttl` at `now`
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl_delta(ttl)
    }

    /// Instant at which the entry stops being fresh
    pub fn expires_at(&self, ttl: Duration) -> DateTime<Utc> {
        self.created_at
            .checked_add_signed(ttl_delta(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Convert a TTL into a signed delta, saturating on overflow
pub fn ttl_delta(ttl: Duration) -> TimeDelta {
    TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX)
}

/// Endpoint key utilities
pub struct CacheKey;

impl CacheKey {
    /// Normalize a raw endpoint key
    ///
    /// Surrounding whitespace and leading slashes are dropped so that
    /// `/danh-sach/phim-moi` and `danh-sach/phim-moi` share one entry.
    pub fn normalize(raw: &str) -> Result<String> {
        let key = raw.trim().trim_start_matches('/');
        Self::validate(key)?;
        Ok(key.to_string())
    }

    /// Validate an endpoint key
    pub fn validate(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_argument("Cache key cannot be empty"));
        }

        if key.len() > CACHE_KEY_MAX_LEN {
            return Err(Error::invalid_argument(format!(
                "Cache key too long (max {CACHE_KEY_MAX_LEN} characters)"
            )));
        }

        if key.chars().any(char::is_control) {
            return Err(Error::invalid_argument(
                "Cache key contains invalid characters",
            ));
        }

        if key.split('/').any(|segment| segment == "..") {
            return Err(Error::invalid_argument(
                "Cache key cannot contain parent directory segments",
            ));
        }

        Ok(())
    }
}

/// Cache Operation Statistics
///
/// Stores fill in `entries` and `tags`; the read-through service fills in
/// the request counters.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Reads served from a fresh entry
    pub hits: u64,
    /// Reads that found no fresh entry
    pub misses: u64,
    /// Upstream fetches issued
    pub fetches: u64,
    /// Upstream fetches that failed
    pub fetch_failures: u64,
    /// Reads that waited on another caller's fetch for the same key
    pub coalesced: u64,
    /// Number of stored entries
    pub entries: u64,
    /// Number of tags with at least one entry
    pub tags: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    #[allow(clippy::cast_precision_loss)]
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}
