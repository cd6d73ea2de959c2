//! Route handlers
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`trending`] | `GET /api/trending` |
//! | [`catalog`] | `GET /api/catalog/<path..>` |
//! | [`admin`] | `POST /api/revalidate`, `GET /api/cache/stats` |
//! | [`health`] | `GET /health`, `GET /live` |

pub mod admin;
pub mod catalog;
pub mod health;
pub mod trending;

pub use admin::{RevalidateResponse, cache_stats, revalidate};
pub use catalog::get_catalog;
pub use health::{HealthResponse, live};
pub use trending::{TrendingQuery, get_trending};
