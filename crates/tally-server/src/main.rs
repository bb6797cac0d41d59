//! tally server.
//!
//! Focus: lifecycle
//! - HTTP endpoint: GET /
//! - Retrying increment against the external counter store
//! - Tracing line per retry and per failed request

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use tally_server::{app_state, config, router, store};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Config (strict parsing + validate)
    let cfg = config::load_from_file("tally.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    // The URL is checked here; the connection itself is established lazily
    // so the process can come up before the store does.
    let redis = store::RedisStore::open(&cfg.store.url).expect("store url invalid");

    let state = app_state::AppState::new(cfg, Arc::new(redis));
    let app = router::build_router(state);

    tracing::info!(%listen, "tally-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
