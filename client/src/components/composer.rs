//! Message composer: auto-growing textarea plus send button.
//!
//! Enter sends, Shift+Enter inserts a newline. Both controls are disabled
//! while a send is in flight.

use leptos::prelude::*;

use crate::app::use_dispatch;
use crate::controller::events::UiEvent;
use crate::controller::is_send_key;
use crate::state::ui::UiState;

#[component]
pub fn Composer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = use_dispatch();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let enabled = Memo::new(move |_| ui.with(|s| s.input_enabled));
    let focus_seq = Memo::new(move |_| ui.with(|s| s.focus_seq));

    Effect::new(move || {
        let _ = focus_seq.get();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                let _ = el.focus();
            }
        }
    });

    let send = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get_untracked() {
                crate::util::dom::reset_height(&el);
            }
        }
        dispatch(UiEvent::SendRequested);
    };

    let on_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get_untracked() {
                crate::util::dom::auto_grow(&el);
            }
        }
        dispatch(UiEvent::DraftChanged(event_target_value(&ev)));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="chat-input">
            <textarea
                id="message-input"
                node_ref=input_ref
                rows="1"
                placeholder="Type your message..."
                prop:value=move || ui.with(|s| s.draft.clone())
                prop:disabled=move || !enabled.get()
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
            <button
                id="send-button"
                class="send-button"
                disabled=move || !enabled.get()
                on:click=move |_| send()
            >
                <i class="fas fa-paper-plane"></i>
            </button>
        </div>
    }
}
