use super::*;

#[test]
fn conversation_path_formats_expected_path() {
    assert_eq!(conversation_path("s-123"), "/get_conversation/s-123");
}

#[test]
fn conversation_path_keeps_reserved_characters_inside_one_segment() {
    assert_eq!(conversation_path("x?q=1"), "/get_conversation/x%3Fq%3D1");
    assert_eq!(conversation_path("a/b#c"), "/get_conversation/a%2Fb%23c");
    assert_eq!(conversation_path("two words"), "/get_conversation/two%20words");
}

#[test]
fn endpoint_constants_match_backend_routes() {
    assert_eq!(CREATE_SESSION_PATH, "/create_session");
    assert_eq!(SESSIONS_PATH, "/get_sessions");
    assert_eq!(CHAT_PATH, "/chat");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_is_unavailable_outside_browser() {
    let backend = HttpBackend;
    let err = futures::executor::block_on(backend.list_sessions()).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
