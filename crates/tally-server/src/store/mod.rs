//! Counter store seam.
//!
//! The increment loop only ever sees `CounterStore`, so backends can be
//! swapped in tests. `StoreError` distinguishes exactly one failure kind:
//! `Connection`, the only kind the loop will retry.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use thiserror::Error;

pub mod redis;

pub use self::redis::RedisStore;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors surfaced by a counter store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be communicated with (refusal, I/O, timeout).
    #[error("store connection failed: {0}")]
    Connection(String),
    /// Any application-level store failure. Never retried.
    #[error("store error: {0}")]
    Other(String),
}

/// Atomic counter storage.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Atomically add 1 to the integer at `key` and return the new value.
    async fn incr(&self, key: &str) -> StoreResult<i64>;
}

/// In-process store backed by an atomic. Used by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: AtomicI64,
}

impl MemoryStore {
    pub fn new(start: i64) -> Self {
        Self {
            value: AtomicI64::new(start),
        }
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn incr(&self, _key: &str) -> StoreResult<i64> {
        Ok(self.value.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
