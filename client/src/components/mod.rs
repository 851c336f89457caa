//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `UiState` from the Leptos context and report user input as
//! `UiEvent`s through `app::use_dispatch`. None of them call the network.

pub mod chat_header;
pub mod composer;
pub mod error_banner;
pub mod message_bubble;
pub mod message_list;
pub mod session_form;
pub mod session_list;
