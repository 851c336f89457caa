//! Chat API forwarding handlers.
//!
//! ERROR HANDLING
//! ==============
//! Upstream answers are relayed with their status, content type and body, so
//! the widget sees the backend's `{status, ...}` envelope unchanged. Only a
//! transport failure is answered here, as `502` with the same envelope shape.

#[cfg(test)]
#[path = "chat_api_test.rs"]
mod chat_api_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::upstream::{Relayed, UpstreamError};

pub const CREATE_SESSION_PATH: &str = "/create_session";
pub const SESSIONS_PATH: &str = "/get_sessions";
pub const CONVERSATION_PATH: &str = "/get_conversation/{id}";
const CONVERSATION_PREFIX: &str = "/get_conversation";
pub const CHAT_PATH: &str = "/chat";

pub async fn create_session(State(state): State<AppState>, body: Bytes) -> Response {
    into_response(CREATE_SESSION_PATH, state.upstream.post_json(CREATE_SESSION_PATH, body).await)
}

pub async fn get_sessions(State(state): State<AppState>) -> Response {
    into_response(SESSIONS_PATH, state.upstream.get(SESSIONS_PATH).await)
}

/// `id` arrives decoded; it is re-encoded as a single upstream segment.
pub async fn get_conversation(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    into_response(CONVERSATION_PATH, state.upstream.get_segment(CONVERSATION_PREFIX, &id).await)
}

pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    into_response(CHAT_PATH, state.upstream.post_json(CHAT_PATH, body).await)
}

fn into_response(route: &str, result: Result<Relayed, UpstreamError>) -> Response {
    match result {
        Ok(relayed) => {
            tracing::debug!(route, status = relayed.status, "relayed chat backend response");
            relay_response(relayed)
        }
        Err(e) => {
            tracing::warn!(route, error = %e, "chat backend unavailable");
            bad_gateway(&e)
        }
    }
}

fn relay_response(relayed: Relayed) -> Response {
    let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, Body::from(relayed.body)).into_response();
    if let Some(value) = relayed.content_type.and_then(|v| HeaderValue::from_str(&v).ok()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

pub(crate) fn bad_gateway(err: &UpstreamError) -> Response {
    let body = serde_json::json!({ "status": "error", "error": err.to_string() });
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}
