//! # Movie Catalog Cache Server
//!
//! Rocket HTTP surface over the application services.
//!
//! ## Endpoints
//!
//! | Path | Method | Auth | Description |
//! |------|--------|------|-------------|
//! | `/api/trending?type=` | GET | - | Materialized trending list |
//! | `/api/catalog/<path..>` | GET | - | Read-through proxy over the upstream catalog |
//! | `/api/revalidate?tag=` | POST | admin | Purge every cached entry carrying a tag |
//! | `/api/cache/stats` | GET | admin | Cache counters |
//! | `/health`, `/live` | GET | - | Probes |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults, then mcc.toml, then MCC__* environment variables
//!     mcc_server::run(None).await
//! }
//! ```

// Allow Rust 2024 compatibility issues from Rocket's route macros
#![allow(rust_2024_compatibility)]

pub mod auth;
pub mod constants;
pub mod handlers;
pub mod init;
pub mod response;
pub mod routes;

pub use init::run;
pub use routes::build_rocket;
