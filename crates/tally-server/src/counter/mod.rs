//! Retrying counter increment.
//!
//! One increment call per request; connection failures consume a fixed
//! retry budget with a fixed wait between attempts. Atomicity of the
//! increment itself is the store's guarantee, not ours.

use std::sync::Arc;

use tally_core::counter::RetryPolicy;
use tally_core::error::{Result, TallyError};

use crate::store::{CounterStore, StoreError};

/// The counter operation bound to a store, a key, and a retry budget.
pub struct HitCounter {
    store: Arc<dyn CounterStore>,
    key: String,
    policy: RetryPolicy,
}

impl HitCounter {
    pub fn new(store: Arc<dyn CounterStore>, key: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            store,
            key: key.into(),
            policy,
        }
    }

    /// Atomically increment the counter and return the post-increment value.
    ///
    /// A budget of N retries allows up to N + 1 store calls with N waits
    /// between them. Once the budget is spent, the most recent connection
    /// error is returned. Non-connection errors propagate immediately.
    pub async fn increment(&self) -> Result<i64> {
        let mut retries = self.policy.retries;
        loop {
            match self.store.incr(&self.key).await {
                Ok(value) => return Ok(value),
                Err(StoreError::Connection(msg)) => {
                    if retries == 0 {
                        tracing::error!(key = %self.key, "retry budget exhausted: {msg}");
                        return Err(TallyError::StoreUnavailable(msg));
                    }
                    retries -= 1;
                    tracing::warn!(
                        key = %self.key,
                        remaining = retries,
                        "store connection failed, retrying: {msg}"
                    );
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(StoreError::Other(msg)) => return Err(TallyError::Internal(msg)),
            }
        }
    }
}
