//! Shared application state for the tally server.
//!
//! The store handle is constructed by the caller and injected here; nothing
//! in the request path reaches for ambient globals.

use std::sync::Arc;

use crate::config::TallyConfig;
use crate::counter::HitCounter;
use crate::store::CounterStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: TallyConfig,
    counter: HitCounter,
}

impl AppState {
    /// Build application state around an injected counter store.
    pub fn new(cfg: TallyConfig, store: Arc<dyn CounterStore>) -> Self {
        let counter = HitCounter::new(store, cfg.store.key.clone(), cfg.store.retry.policy());
        Self {
            inner: Arc::new(AppStateInner { cfg, counter }),
        }
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &HitCounter {
        &self.inner.counter
    }
}
