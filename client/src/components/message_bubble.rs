//! One rendered chat message.
//!
//! DESIGN
//! ======
//! Content is tokenized into [`Fragment`]s and rendered as elements, so model
//! output is never injected as raw HTML. A code block's `<code>` carries the
//! fence's language token as its class, which highlight.js reads.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::ui::ChatMessage;
use crate::util::format::{Fragment, tokenize};

/// Wrapper class for a user or assistant row.
pub(crate) fn wrapper_class(is_user: bool) -> &'static str {
    if is_user {
        "message-wrapper user-message-wrapper"
    } else {
        "message-wrapper bot-message-wrapper"
    }
}

/// Bubble class for a user or assistant message.
pub(crate) fn bubble_class(is_user: bool) -> &'static str {
    if is_user { "message user-message" } else { "message bot-message" }
}

fn fragment_view(fragment: Fragment) -> AnyView {
    let class = fragment.language_class().to_owned();
    match fragment {
        Fragment::Text(text) => text.into_any(),
        Fragment::InlineCode(code) => view! { <code>{code}</code> }.into_any(),
        Fragment::Link(url) => {
            let href = url.clone();
            view! { <a href=href target="_blank" rel="noopener noreferrer">{url}</a> }.into_any()
        }
        Fragment::CodeBlock { code, .. } => view! {
            <pre><code class=class>{code}</code></pre>
        }
        .into_any(),
    }
}

/// Message row with avatar, formatted content, and time.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let ChatMessage { content, is_user, timestamp, animate, .. } = message;
    let fragments: Vec<AnyView> = tokenize(&content).into_iter().map(fragment_view).collect();
    let avatar = if is_user { "fas fa-user" } else { "fas fa-robot" };

    view! {
        <div class=wrapper_class(is_user) class:message-wrapper--enter=animate>
            <div class="message-avatar">
                <i class=avatar></i>
            </div>
            <div class=bubble_class(is_user)>
                <div class="message-content">{fragments}</div>
                <div class="message-time">{timestamp}</div>
            </div>
        </div>
    }
}
