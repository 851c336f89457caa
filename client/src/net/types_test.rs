use super::*;

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn decode_success_session_list() {
    let body = r#"{
        "status": "success",
        "sessions": [
            {"session_id": "s-1", "system_prompt": "Pirate", "created_at": "2024-03-01 10:00:00"},
            {"session_id": "s-2", "system_prompt": "", "created_at": "2024-03-02 11:30:00"}
        ]
    }"#;
    let list: SessionList = decode_envelope(200, body).unwrap();
    assert_eq!(list.sessions.len(), 2);
    assert_eq!(list.sessions[0].session_id, "s-1");
    assert_eq!(list.sessions[0].system_prompt, "Pirate");
    assert_eq!(list.sessions[1].system_prompt, "");
}

#[test]
fn decode_error_envelope_with_server_status() {
    let body = r#"{"status": "error", "error": "Invalid session ID"}"#;
    let err = decode_envelope::<ChatReply>(404, body).unwrap_err();
    assert_eq!(err, ApiError::Application("Invalid session ID".to_owned()));
}

#[test]
fn decode_error_envelope_without_message() {
    let err = decode_envelope::<CreatedSession>(500, r#"{"status":"error"}"#).unwrap_err();
    assert_eq!(err, ApiError::Application("unknown error".to_owned()));
}

#[test]
fn decode_non_json_failure_status_maps_to_status_error() {
    let err = decode_envelope::<SessionList>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Status(502));
}

#[test]
fn decode_non_json_ok_status_maps_to_decode_error() {
    let err = decode_envelope::<SessionList>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_chat_reply_ignores_extra_fields() {
    let body = r#"{"status":"success","response":"Ahoy","timestamp":"14:05","model":"x"}"#;
    let reply: ChatReply = decode_envelope(200, body).unwrap();
    assert_eq!(reply.response, "Ahoy");
    assert_eq!(reply.timestamp, "14:05");
}

#[test]
fn decode_conversation_turn_roles() {
    let body = r#"{"status":"success","conversations":[
        {"role":"user","content":"hi","timestamp":"2024-03-01 10:00:00"},
        {"role":"assistant","content":"hello","timestamp":"2024-03-01 10:00:02"}
    ]}"#;
    let conv: Conversation = decode_envelope(200, body).unwrap();
    assert!(conv.conversations[0].is_user());
    assert!(!conv.conversations[1].is_user());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn chat_request_uses_camel_case_user_id() {
    let req = ChatRequest {
        message: "hello".to_owned(),
        session_id: "s-1".to_owned(),
        user_id: "user_abc123xyz".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "message": "hello", "session_id": "s-1", "userId": "user_abc123xyz" })
    );
}

#[test]
fn create_session_request_shape() {
    let req = CreateSessionRequest { system_prompt: "Default chat session".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "system_prompt": "Default chat session" })
    );
}
