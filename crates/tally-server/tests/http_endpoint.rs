//! Exact response bodies for the hit endpoint.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::extract::State;
use axum::http::StatusCode;

use tally_server::app_state::AppState;
use tally_server::config;
use tally_server::store::{CounterStore, MemoryStore, StoreError, StoreResult};
use tally_server::transport;

fn state_with(store: Arc<dyn CounterStore>, yaml: &str) -> AppState {
    let cfg = config::load_from_str(yaml).expect("config must parse");
    AppState::new(cfg, store)
}

async fn body_of(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn first_hit_from_zero() {
    let state = state_with(Arc::new(MemoryStore::new(0)), "version: 1\n");

    let resp = transport::http::hit(State(state)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_of(resp).await,
        "Hello World! I have been seen 10000000 times.\n"
    );
}

#[tokio::test]
async fn hit_from_forty_one() {
    let state = state_with(Arc::new(MemoryStore::new(41)), "version: 1\n");

    let resp = transport::http::hit(State(state)).await;
    assert_eq!(
        body_of(resp).await,
        "Hello World! I have been seen 420000000 times.\n"
    );
}

#[tokio::test]
async fn greeting_is_plain_text() {
    let state = state_with(Arc::new(MemoryStore::new(0)), "version: 1\n");

    let resp = transport::http::hit(State(state)).await;
    let content_type = resp
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("text/plain"));
}

/// Store that never comes up.
struct DownStore;

#[async_trait]
impl CounterStore for DownStore {
    async fn incr(&self, _key: &str) -> StoreResult<i64> {
        Err(StoreError::Connection("connection refused".into()))
    }
}

#[tokio::test]
async fn store_failure_surfaces_as_500() {
    // Zero retries so the failure surfaces without waiting.
    let yaml = r#"
version: 1
store:
  retry:
    retries: 0
    delay_ms: 0
"#;
    let state = state_with(Arc::new(DownStore), yaml);

    let resp = transport::http::hit(State(state)).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = serde_json::from_str(&body_of(resp).await).unwrap();
    assert_eq!(body["code"], "STORE_UNAVAILABLE");
    assert!(body["msg"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn router_builds_with_injected_state() {
    let state = state_with(Arc::new(MemoryStore::new(0)), "version: 1\n");
    assert_eq!(state.cfg().server.listen, "0.0.0.0:8000");
    let _app = tally_server::router::build_router(state);
}
