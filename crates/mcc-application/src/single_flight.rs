//! Per-key single-flight locks
//!
//! Concurrent misses on the same key queue behind one async mutex so only
//! the first caller reaches the upstream; later callers re-read the cache
//! once the lock is theirs. Locks for different keys never contend.
//!
//! The lock is released on every exit path: normal return, error return,
//! and cancellation of the calling future. Idle locks are removed from the
//! map as the last holder leaves.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

/// A map of per-key async locks
#[derive(Debug, Default)]
pub struct KeyedLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyedLocks {
    /// Create an empty lock map
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `key`
    pub async fn run<F, Fut, T>(&self, key: &str, f: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let lock = self.locks.entry(key.to_owned()).or_default().clone();
        let _cleanup = Cleanup {
            locks: &self.locks,
            key,
        };
        let _permit = lock.lock_owned().await;
        f().await
    }

    /// Number of keys with a holder or waiter
    pub fn active(&self) -> usize {
        self.locks.len()
    }
}

/// Removes the key's lock once nobody else references it
///
/// Declared before the permit so it drops after the permit has released.
struct Cleanup<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    key: &'a str,
}

impl Drop for Cleanup<'_> {
    fn drop(&mut self) {
        self.locks
            .remove_if(self.key, |_, lock| Arc::strong_count(lock) == 1);
    }
}
