//! Axum router wiring.
//!
//! The service exposes a single `/` route; the counter has no wider API
//! surface.

use axum::{routing::get, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(transport::http::hit))
        .with_state(state)
}
