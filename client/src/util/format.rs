//! Message text formatting: fenced code, inline code, and bare links.
//!
//! DESIGN
//! ======
//! Formatting is a tokenizer rather than a chain of string replacements.
//! Fenced blocks are cut out first, and only the text between them is scanned
//! for inline code and URLs, so fence contents are never re-processed and an
//! URL inside backticks stays literal code. The same fragments feed both the
//! Leptos view (elements, no `innerHTML`) and [`to_markup`].

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::sync::LazyLock;

use regex::Regex;

/// ```` ```lang\n ... ``` ````; the language token is optional.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("fence pattern compiles")
});

/// Inline code or a bare `http(s)` URL, whichever starts first.
static INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`([^`]+)`|(https?://\S+)").expect("inline pattern compiles")
});

/// One piece of a formatted message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// Literal text.
    Text(String),
    /// Single-backtick code span.
    InlineCode(String),
    /// Bare URL; opened in a new tab.
    Link(String),
    /// Triple-backtick block with its trimmed contents.
    CodeBlock { language: Option<String>, code: String },
}

impl Fragment {
    /// CSS class applied to a block's `<code>` element (empty when untagged).
    #[must_use]
    pub fn language_class(&self) -> &str {
        match self {
            Self::CodeBlock { language: Some(lang), .. } => lang,
            _ => "",
        }
    }
}

/// Split message content into fragments.
#[must_use]
pub fn tokenize(message: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut last = 0;

    for caps in FENCE_RE.captures_iter(message) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_inline(&message[last..whole.start()], &mut fragments);
        fragments.push(Fragment::CodeBlock {
            language: caps.get(1).map(|m| m.as_str().to_owned()),
            code: caps.get(2).map_or("", |m| m.as_str()).trim().to_owned(),
        });
        last = whole.end();
    }
    push_inline(&message[last..], &mut fragments);

    fragments
}

fn push_inline(segment: &str, out: &mut Vec<Fragment>) {
    let mut last = 0;

    for caps in INLINE_RE.captures_iter(segment) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_text(&segment[last..whole.start()], out);
        if let Some(code) = caps.get(1) {
            out.push(Fragment::InlineCode(code.as_str().to_owned()));
        } else if let Some(url) = caps.get(2) {
            out.push(Fragment::Link(url.as_str().to_owned()));
        }
        last = whole.end();
    }
    push_text(&segment[last..], out);
}

fn push_text(text: &str, out: &mut Vec<Fragment>) {
    if !text.is_empty() {
        out.push(Fragment::Text(text.to_owned()));
    }
}

/// Whether any fragment is a fenced block (needs syntax highlighting).
#[must_use]
pub fn has_code_block(fragments: &[Fragment]) -> bool {
    fragments.iter().any(|f| matches!(f, Fragment::CodeBlock { .. }))
}

/// Render fragments to HTML markup.
#[must_use]
pub fn to_markup(fragments: &[Fragment]) -> String {
    let mut html = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => html.push_str(&escape_html(text)),
            Fragment::InlineCode(code) => {
                html.push_str("<code>");
                html.push_str(&escape_html(code));
                html.push_str("</code>");
            }
            Fragment::Link(url) => {
                let escaped = escape_html(url);
                html.push_str(&format!(
                    r#"<a href="{escaped}" target="_blank" rel="noopener noreferrer">{escaped}</a>"#
                ));
            }
            Fragment::CodeBlock { code, .. } => {
                html.push_str(&format!(
                    r#"<pre><code class="{}">{}</code></pre>"#,
                    escape_html(fragment.language_class()),
                    escape_html(code)
                ));
            }
        }
    }
    html
}

/// Format raw message content straight to markup.
#[must_use]
pub fn format_message(message: &str) -> String {
    to_markup(&tokenize(message))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
