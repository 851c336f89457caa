//! Widget UI state owned by the chat controller.
//!
//! DESIGN
//! ======
//! Everything the view reads lives in one `UiState` value. The app keeps it in
//! an `RwSignal<UiState>`; tests keep it in an `Rc<RefCell<_>>`. Both are
//! reached through [`UiStore`], so the controller never depends on the
//! reactive runtime. Sequence counters (`focus_seq`, `scroll_seq`,
//! `highlight_seq`) let the view react to one-shot requests without storing
//! DOM handles here.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::types::SessionSummary;
use crate::util::format::{has_code_block, tokenize};

/// Label shown for sessions created without one.
pub const UNTITLED_SESSION: &str = "Untitled Session";

/// Send flow phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending,
}

/// A rendered message bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    /// Client-local key for keyed rendering.
    pub id: u64,
    pub content: String,
    pub is_user: bool,
    /// Display timestamp.
    pub timestamp: String,
    /// Fade/slide entrance and smooth scroll; `false` for history loads.
    pub animate: bool,
}

/// Transient error banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Distinguishes banners so a stale auto-dismiss cannot clear a newer one.
    pub id: u64,
    pub message: String,
}

/// The "new session" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub open: bool,
    pub label: String,
}

/// Everything the widget renders.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub current_session_id: Option<String>,
    pub sessions: Vec<SessionSummary>,
    pub header_label: String,
    pub messages: Vec<ChatMessage>,
    pub phase: SendPhase,
    pub typing: bool,
    pub input_enabled: bool,
    pub draft: String,
    pub session_form: SessionForm,
    pub banner: Option<ErrorBanner>,
    pub dark_mode: bool,
    /// Bumped whenever the current session changes; late responses carrying
    /// an older value are dropped.
    pub switch_generation: u64,
    pub focus_seq: u64,
    pub form_focus_seq: u64,
    pub scroll_seq: u64,
    /// Behavior of the scroll requested by the latest `scroll_seq` bump.
    pub smooth_scroll: bool,
    /// Bumped only when a pushed message contains a fenced code block.
    pub highlight_seq: u64,
    next_message_id: u64,
    next_banner_id: u64,
}

impl UiState {
    /// Initial state: idle with input enabled.
    #[must_use]
    pub fn new(dark_mode: bool) -> Self {
        Self { input_enabled: true, dark_mode, ..Self::default() }
    }

    #[must_use]
    pub fn is_current(&self, session_id: &str) -> bool {
        self.current_session_id.as_deref() == Some(session_id)
    }

    /// Label of a listed session, falling back to [`UNTITLED_SESSION`].
    #[must_use]
    pub fn label_for(&self, session_id: &str) -> String {
        self.sessions
            .iter()
            .find(|s| s.session_id == session_id)
            .map(|s| session_label(&s.system_prompt).to_owned())
            .unwrap_or_else(|| UNTITLED_SESSION.to_owned())
    }

    /// Append a message bubble and request a scroll to the bottom, plus a
    /// highlight pass when the message carries a code block.
    pub fn push_message(&mut self, content: String, is_user: bool, timestamp: String, animate: bool) {
        if has_code_block(&tokenize(&content)) {
            self.highlight_seq += 1;
        }
        self.next_message_id += 1;
        self.messages.push(ChatMessage { id: self.next_message_id, content, is_user, timestamp, animate });
        self.smooth_scroll = animate;
        self.scroll_seq += 1;
    }

    /// Show the typing indicator and keep the pane pinned to the bottom.
    pub fn show_typing(&mut self) {
        self.typing = true;
        self.smooth_scroll = true;
        self.scroll_seq += 1;
    }

    /// Make `session_id` current with an empty pane; returns the new generation.
    pub fn begin_switch(&mut self, session_id: &str) -> u64 {
        self.current_session_id = Some(session_id.to_owned());
        self.messages.clear();
        self.header_label = self.label_for(session_id);
        self.switch_generation += 1;
        self.switch_generation
    }

    /// Replace the banner; returns its id.
    pub fn show_banner(&mut self, message: &str) -> u64 {
        self.next_banner_id += 1;
        self.banner = Some(ErrorBanner { id: self.next_banner_id, message: message.to_owned() });
        self.next_banner_id
    }

    /// Clear the banner only if it is still the one identified by `id`.
    pub fn dismiss_banner(&mut self, id: u64) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }
}

/// Display label for a session prompt.
#[must_use]
pub fn session_label(system_prompt: &str) -> &str {
    if system_prompt.is_empty() { UNTITLED_SESSION } else { system_prompt }
}

/// Access to the [`UiState`] cell.
pub trait UiStore {
    fn read_state<R>(&self, f: impl FnOnce(&UiState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut UiState));
}

impl UiStore for RwSignal<UiState> {
    fn read_state<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut UiState)) {
        self.update(f);
    }
}

impl UiStore for Rc<RefCell<UiState>> {
    fn read_state<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut UiState)) {
        f(&mut self.borrow_mut());
    }
}
