//! Wire DTOs for the chat backend REST API.
//!
//! DESIGN
//! ======
//! Every response is wrapped in a `status` envelope. `Envelope<T>` decodes the
//! `"success"` arm into the endpoint payload and keeps the optional `error`
//! text of the `"error"` arm so callers can tell application failures from
//! transport failures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Errors surfaced by backend calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Non-success HTTP status without a readable envelope.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The backend answered with `status: "error"`.
    #[error("backend error: {0}")]
    Application(String),

    /// Backend calls are only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Response envelope shared by all four endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success(T),
    Error {
        #[serde(default)]
        error: Option<String>,
    },
}

impl<T> Envelope<T> {
    /// Convert into a `Result`, mapping the error arm to [`ApiError::Application`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Application`] when the envelope carries `status: "error"`.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error { error } => Err(ApiError::Application(error.unwrap_or_else(|| "unknown error".to_owned()))),
        }
    }
}

/// Decode a raw response into the endpoint payload.
///
/// The envelope wins over the HTTP status: the backend reports application
/// errors with 4xx/5xx codes and a JSON body. Only when the body is not an
/// envelope does a non-2xx status become [`ApiError::Status`].
///
/// # Errors
///
/// Returns the mapped [`ApiError`] for error envelopes, undecodable bodies,
/// and bare non-success statuses.
pub fn decode_envelope<T>(status: u16, body: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Body of `POST /create_session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub system_prompt: String,
}

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Success payload of `POST /create_session`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedSession {
    pub session_id: String,
}

/// One entry of `GET /get_sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Opaque backend identifier.
    pub session_id: String,
    /// Display label; may be empty.
    #[serde(default)]
    pub system_prompt: String,
    /// Creation time as `YYYY-MM-DD HH:MM:SS`.
    #[serde(default)]
    pub created_at: String,
}

/// Success payload of `GET /get_sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionList {
    #[serde(default)]
    pub sessions: Vec<SessionSummary>,
}

/// One turn of a session's conversation history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

impl ConversationTurn {
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Success payload of `GET /get_conversation/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub conversations: Vec<ConversationTurn>,
}

/// Success payload of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    pub response: String,
    /// Server-formatted display time (`HH:MM`).
    #[serde(default)]
    pub timestamp: String,
}
