//! Chat page: sidebar plus conversation column.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-scoped browser hooks: the one-shot start-up event after
//! hydration and the debounced window resize listener. Everything else is
//! delegated to `components`.

use leptos::prelude::*;

use crate::app::use_dispatch;
use crate::components::chat_header::{ChatHeader, TypingIndicator};
use crate::components::composer::Composer;
use crate::components::error_banner::ErrorBanner;
use crate::components::message_list::MessageList;
use crate::components::session_form::SessionForm;
use crate::components::session_list::SessionList;
use crate::controller::events::UiEvent;

#[component]
pub fn ChatPage() -> impl IntoView {
    let dispatch = use_dispatch();

    // Effects only run in the browser, so this fires once after hydration.
    Effect::new(move || dispatch(UiEvent::Ready));

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use gloo_timers::callback::Timeout;

        use crate::controller::RESIZE_DEBOUNCE_MS;

        // Replacing the pending timeout drops, and so cancels, the previous one.
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let _ = window_event_listener(leptos::ev::resize, move |_| {
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || dispatch(UiEvent::Resized));
            pending.borrow_mut().replace(timeout);
        });
    }

    view! {
        <div class="chat-app">
            <aside class="sidebar">
                <div class="sidebar-header">
                    <h2>"Chats"</h2>
                    <button
                        id="create-session-btn"
                        class="create-session-btn"
                        title="New chat"
                        on:click=move |_| dispatch(UiEvent::SessionFormOpened)
                    >
                        <i class="fas fa-plus"></i>
                    </button>
                </div>
                <SessionForm/>
                <SessionList/>
            </aside>
            <main class="chat-container">
                <ChatHeader/>
                <MessageList/>
                <TypingIndicator/>
                <ErrorBanner/>
                <Composer/>
            </main>
        </div>
    }
}
