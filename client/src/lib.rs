//! # chat-client
//!
//! Leptos + WASM chat widget: a session sidebar, a conversation pane, and a
//! composer, talking to a chat backend over four JSON endpoints.
//!
//! ARCHITECTURE
//! ============
//! `controller` owns behavior and is the only layer that calls `net` or
//! touches `state::prefs`. Components read `state::ui::UiState` from context
//! and report DOM events back as `controller::events::UiEvent` values.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
