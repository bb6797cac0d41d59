//! Redis-backed counter store.
//!
//! The connection manager is created lazily on first use so the process can
//! boot while the store is still coming up; until then every attempt surfaces
//! as `StoreError::Connection` and is subject to the caller's retry budget.

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tokio::sync::Mutex;

use tally_core::error::{Result, TallyError};

use super::{CounterStore, StoreError, StoreResult};

pub struct RedisStore {
    client: redis::Client,
    manager: Mutex<Option<ConnectionManager>>,
}

impl RedisStore {
    /// Validate the URL and build the store. No connection is attempted here.
    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| TallyError::BadRequest(format!("invalid store url: {e}")))?;
        Ok(Self {
            client,
            manager: Mutex::new(None),
        })
    }

    /// Get the shared connection manager, establishing it on first use.
    async fn manager(&self) -> StoreResult<ConnectionManager> {
        let mut slot = self.manager.lock().await;
        if let Some(mgr) = slot.as_ref() {
            return Ok(mgr.clone());
        }
        let mgr = ConnectionManager::new(self.client.clone())
            .await
            .map_err(classify)?;
        *slot = Some(mgr.clone());
        Ok(mgr)
    }
}

#[async_trait::async_trait]
impl CounterStore for RedisStore {
    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.manager().await?;
        conn.incr(key, 1).await.map_err(classify)
    }
}

/// Split connection-level failures from everything else.
fn classify(err: redis::RedisError) -> StoreError {
    if err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_io_error()
        || err.is_timeout()
    {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Other(err.to_string())
    }
}
