//! HTTP handler for the hit endpoint.
//!
//! Responsibilities:
//! - invoke the retrying increment
//! - render the greeting body on success
//! - map failures to 500 with a stable JSON error body

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use tally_core::counter::greeting;
use tally_core::error::TallyError;

use crate::app_state::AppState;

fn error_json(err: &TallyError) -> String {
    json!({
        "code": err.client_code().as_str(),
        "msg": err.to_string(),
    })
    .to_string()
}

/// `GET /`: increment the hit counter and greet.
pub async fn hit(State(app): State<AppState>) -> Response {
    match app.counter().increment().await {
        Ok(count) => (StatusCode::OK, greeting(count)).into_response(),
        Err(err) => {
            tracing::error!(code = err.client_code().as_str(), "hit failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                error_json(&err),
            )
                .into_response()
        }
    }
}
