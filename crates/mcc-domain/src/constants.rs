//! Domain constants
//!
//! Defaults shared by the application, provider and server layers.

// ============================================================================
// READ-THROUGH CACHE
// ============================================================================

/// Default TTL for cached upstream responses (1 hour)
pub const DEFAULT_CATALOG_TTL_SECS: u64 = 3600;

/// Default bound on a single upstream fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Tag attached to every catalog response unless configured otherwise
pub const CATALOG_TAG: &str = "catalog";

/// Maximum length of an endpoint key
pub const CACHE_KEY_MAX_LEN: usize = 250;

// ============================================================================
// MATERIALIZED TRENDING CACHE
// ============================================================================

/// Category served when the caller does not name one
pub const DEFAULT_TRENDING_TYPE: &str = "phim-bo";

/// Collection/table holding trending records
pub const TRENDING_COLLECTION: &str = "trending_cache";

/// Shared-cache max age for trending responses (1 hour)
pub const TRENDING_S_MAXAGE_SECS: u64 = 3600;

/// Additional window during which stale trending responses may be served (2 hours)
pub const TRENDING_STALE_WHILE_REVALIDATE_SECS: u64 = 7200;

/// Error flag reported when the trending store cannot be read
pub const TRENDING_ERROR_STORAGE_UNAVAILABLE: &str = "storage_unavailable";
