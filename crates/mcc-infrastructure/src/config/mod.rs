//! Configuration
//!
//! Sources are merged in this order, later overriding earlier:
//!
//! 1. [`AppConfig::default()`]
//! 2. TOML file (`--config` path, or `mcc.toml` in the working directory,
//!    `./mcc/`, the XDG config dir or `~/.mcc/`)
//! 3. Environment variables prefixed `MCC__`, nested with `__`
//!    (e.g. `MCC__CACHE__TTL_SECS=60`)

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdminConfig, AppConfig, CacheConfig, CatalogConfig, LoggingConfig, ServerConfig,
    TrendingConfig,
};
