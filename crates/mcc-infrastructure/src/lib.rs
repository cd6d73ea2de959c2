//! # Movie Catalog Cache - Infrastructure Layer
//!
//! Cross-cutting technical concerns shared by the server and the binary.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML file, `MCC__` environment) |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`di`] | Composition root ([`di::AppContext`]) |
//! | [`cache`] | Background TTL sweep |

pub mod cache;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
