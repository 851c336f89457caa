//! Scrollable conversation pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `UiState::messages` in order. Scrolling is driven by
//! `scroll_seq`: every bump scrolls to the bottom, smoothly for freshly sent
//! messages and instantly for history loads and resizes. Syntax
//! highlighting runs only on `highlight_seq` bumps.

use leptos::prelude::*;

use crate::components::message_bubble::MessageBubble;
use crate::state::ui::UiState;

#[component]
pub fn MessageList() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pane_ref = NodeRef::<leptos::html::Div>::new();
    let scroll_seq = Memo::new(move |_| ui.with(|s| s.scroll_seq));
    let highlight_seq = Memo::new(move |_| ui.with(|s| s.highlight_seq));

    Effect::new(move || {
        let _ = scroll_seq.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = pane_ref.get() {
                let smooth = ui.with_untracked(|s| s.smooth_scroll);
                crate::util::dom::scroll_to_bottom(&el, smooth);
            }
        }
    });

    Effect::new(move || {
        if highlight_seq.get() == 0 {
            return;
        }

        #[cfg(feature = "hydrate")]
        crate::util::dom::highlight_code_blocks();
    });

    view! {
        <div id="chat-messages" class="chat-messages" node_ref=pane_ref>
            <For
                each=move || ui.with(|s| s.messages.clone())
                key=|m| m.id
                children=move |message| view! { <MessageBubble message/> }
            />
        </div>
    }
}
