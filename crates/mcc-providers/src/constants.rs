//! Provider Constants
//!
//! Constants specific to provider implementations. Domain-wide defaults live
//! in `mcc_domain::constants`.

use std::time::Duration;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out after";

/// Longest upstream error body kept in an error message
pub const ERROR_BODY_MAX_CHARS: usize = 256;

/// Default upstream catalog base URL
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://phimapi.com";

// ============================================================================
// POSTGRES CONSTANTS
// ============================================================================

/// Default trending store connection pool size
pub const POSTGRES_DEFAULT_POOL_SIZE: u32 = 4;

/// How long a trending lookup waits for a pooled connection
pub const POSTGRES_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
