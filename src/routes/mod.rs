use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json, Router};
use serde::Serialize;

use crate::{FloatSource, OceanDataStore};

mod download;
mod floats;
mod health;

// ---

/// Shared handle every route receives as state.
pub type SharedStore<S> = Arc<OceanDataStore<S>>;

pub fn router<S>(store: SharedStore<S>) -> Router
where
    S: FloatSource + 'static,
{
    // ---
    Router::new()
        .merge(floats::router())
        .merge(download::router())
        .merge(health::router())
        .with_state(store)
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::debug!("Responding {}: {}", status, message);
    (status, Json(ErrorResponse { error: message })).into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

fn not_found(message: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}
