use super::*;

#[test]
fn user_and_assistant_rows_use_distinct_classes() {
    assert_eq!(wrapper_class(true), "message-wrapper user-message-wrapper");
    assert_eq!(wrapper_class(false), "message-wrapper bot-message-wrapper");
    assert_eq!(bubble_class(true), "message user-message");
    assert_eq!(bubble_class(false), "message bot-message");
}

#[test]
fn link_fragment_builds_with_url_as_href_and_text() {
    let _ = fragment_view(Fragment::Link("https://example.com/a?b=1".to_owned()));
}

#[cfg(feature = "ssr")]
#[test]
fn link_fragment_renders_url_as_href_and_text() {
    let html = fragment_view(Fragment::Link("https://example.com".to_owned())).to_html();
    assert!(html.contains(r#"href="https://example.com""#));
    assert!(html.contains(">https://example.com</a>"));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
}

#[test]
fn code_block_class_is_the_bare_language_token() {
    let fragments = tokenize("```rust\nfn main() {}\n```");
    assert_eq!(fragments[0].language_class(), "rust");
}

#[cfg(feature = "ssr")]
#[test]
fn code_block_renders_language_token_as_code_class() {
    let fragment = tokenize("```rust\nfn main() {}\n```").remove(0);
    let html = fragment_view(fragment).to_html();
    assert!(html.contains(r#"<code class="rust">"#));
}
