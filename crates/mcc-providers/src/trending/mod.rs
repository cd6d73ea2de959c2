//! Trending Store Implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`MemoryTrendingStore`] | In-process records, default and for tests |
//! | [`PostgresTrendingStore`] | One row per category type in a Postgres table |

pub mod memory;
#[cfg(feature = "trending-postgres")]
pub mod postgres;

pub use memory::MemoryTrendingStore;
#[cfg(feature = "trending-postgres")]
pub use postgres::PostgresTrendingStore;
