//! REST calls to the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! relative paths. Server-side (SSR): every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are read as text first and decoded through
//! [`decode_envelope`](super::types::decode_envelope), so a 500 carrying
//! `{status:"error"}` is reported as an application error rather than a
//! transport failure.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, ChatReply, ChatRequest, ConversationTurn, SessionSummary};
#[cfg(feature = "hydrate")]
use super::types::{Conversation, CreateSessionRequest, CreatedSession, SessionList, decode_envelope};

pub const CREATE_SESSION_PATH: &str = "/create_session";
pub const SESSIONS_PATH: &str = "/get_sessions";
pub const CHAT_PATH: &str = "/chat";

/// Path for a single session's conversation history.
///
/// Session ids are opaque; the id is encoded as exactly one path segment.
#[must_use]
pub fn conversation_path(session_id: &str) -> String {
    format!("/get_conversation/{}", urlencoding::encode(session_id))
}

/// The four backend operations the widget depends on.
///
/// Futures are not required to be `Send`; the browser runs them on the
/// single UI thread via `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    /// `POST /create_session`; returns the new session id.
    async fn create_session(&self, system_prompt: &str) -> Result<String, ApiError>;

    /// `GET /get_sessions`.
    async fn list_sessions(&self) -> Result<Vec<SessionSummary>, ApiError>;

    /// `GET /get_conversation/{id}`; turns in chronological order.
    async fn conversation(&self, session_id: &str) -> Result<Vec<ConversationTurn>, ApiError>;

    /// `POST /chat`.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError>;
}

/// Backend reached over HTTP from the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpBackend;

#[cfg(feature = "hydrate")]
async fn read_response<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_envelope(status, &body)
}

impl ChatBackend for HttpBackend {
    async fn create_session(&self, system_prompt: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = CreateSessionRequest { system_prompt: system_prompt.to_owned() };
            let resp = gloo_net::http::Request::post(CREATE_SESSION_PATH)
                .json(&payload)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let created: CreatedSession = read_response(resp).await?;
            Ok(created.session_id)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = system_prompt;
            Err(ApiError::Unavailable)
        }
    }

    async fn list_sessions(&self) -> Result<Vec<SessionSummary>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSIONS_PATH)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let list: SessionList = read_response(resp).await?;
            Ok(list.sessions)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn conversation(&self, session_id: &str) -> Result<Vec<ConversationTurn>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = conversation_path(session_id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let conversation: Conversation = read_response(resp).await?;
            Ok(conversation.conversations)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session_id;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(CHAT_PATH)
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_response(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
