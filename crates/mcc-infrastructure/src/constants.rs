//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `mcc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mcc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "mcc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MCC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MCC_LOG";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Default cache store
pub const DEFAULT_CACHE_PROVIDER: &str = "memory";

/// Default interval between expiry sweeps (5 minutes)
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

// ============================================================================
// TRENDING CONSTANTS
// ============================================================================

/// Default trending store
pub const DEFAULT_TRENDING_PROVIDER: &str = "memory";

/// Default bound on a trending lookup
pub const DEFAULT_TRENDING_LOOKUP_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// ADMIN CONSTANTS
// ============================================================================

/// Header carrying the admin key
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";
