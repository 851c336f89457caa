//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Script, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::controller::events::UiEvent;
use crate::controller::{AppController, BrowserDelay, ChatController};
use crate::net::api::HttpBackend;
use crate::pages::chat::ChatPage;
use crate::state::prefs::Preferences;
use crate::state::ui::UiState;
use crate::util::storage::LocalStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body data-theme="light">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the UI state signal and the controller, then routes to the
/// single chat page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Theme comes from preferences during start-up so SSR and hydration agree.
    let ui = RwSignal::new(UiState::new(false));
    let controller: AppController =
        ChatController::new(HttpBackend, Preferences::new(LocalStore), ui, BrowserDelay);

    provide_context(ui);
    provide_context(controller);

    view! {
        <Stylesheet id="leptos" href="/pkg/chatdock.css"/>
        <Stylesheet href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"/>
        <Stylesheet href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css"/>
        <Script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"/>
        <Title text="Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}

/// Event sink for components: runs each event through the controller on the
/// local task queue.
pub fn use_dispatch() -> impl Fn(UiEvent) + Copy + 'static {
    let controller = expect_context::<AppController>();
    move |event| {
        leptos::task::spawn_local(async move {
            controller.dispatch(event).await;
        });
    }
}
