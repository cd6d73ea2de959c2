//! Clock Port
//!
//! Time source for freshness decisions. Injected so TTL behaviour can be
//! driven by a manual clock in tests.

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}
