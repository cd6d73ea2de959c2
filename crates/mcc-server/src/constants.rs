//! Server-specific constants

/// Response header reporting whether a catalog body came from the cache
pub const X_CACHE_HEADER: &str = "X-Cache";

/// `X-Cache` value for a fresh cached body
pub const X_CACHE_HIT: &str = "HIT";

/// `X-Cache` value for a body fetched during the request
pub const X_CACHE_MISS: &str = "MISS";

/// `Cache-Control` for trending responses that are not backed by a record
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// ============================================================================
// ERROR CODES (machine-readable `error` field)
// ============================================================================

/// Upstream fetch failed
pub const ERROR_FETCH_FAILURE: &str = "fetch_failure";

/// Request carried an unusable argument
pub const ERROR_INVALID_ARGUMENT: &str = "invalid_argument";

/// Anything else
pub const ERROR_INTERNAL: &str = "internal_error";

/// Admin key missing
pub const ERROR_MISSING_API_KEY: &str = "missing_api_key";

/// Admin key wrong
pub const ERROR_INVALID_API_KEY: &str = "invalid_api_key";

/// Admin endpoints switched off
pub const ERROR_ADMIN_DISABLED: &str = "admin_disabled";

/// No route matched
pub const ERROR_NOT_FOUND: &str = "not_found";
