//! Conversation header: current session label and the theme toggle.

use leptos::prelude::*;

use crate::app::use_dispatch;
use crate::controller::events::UiEvent;
use crate::state::ui::UiState;
use crate::util::dark_mode::toggle_icon;

#[component]
pub fn ChatHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = use_dispatch();

    view! {
        <header class="chat-header">
            <div id="current-session-info" class="current-session-info">
                {move || ui.with(|s| s.header_label.clone())}
            </div>
            <button
                id="theme-toggle"
                class="theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| dispatch(UiEvent::ThemeToggled)
            >
                <i class=move || toggle_icon(ui.with(|s| s.dark_mode))></i>
            </button>
        </header>
    }
}

/// Three-dot indicator shown while awaiting a reply.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div
            id="typing-indicator"
            class="typing-indicator"
            style:display=move || if ui.with(|s| s.typing) { "flex" } else { "none" }
        >
            <span></span>
            <span></span>
            <span></span>
        </div>
    }
}
