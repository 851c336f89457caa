//! UI event table.
//!
//! Each DOM listener the page installs maps to exactly one [`UiEvent`]
//! variant, and [`ChatController::dispatch`] is the only place events turn
//! into behavior.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use super::{ChatController, Delay};
use crate::net::api::ChatBackend;
use crate::state::ui::UiStore;
use crate::util::storage::PrefStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// Page mounted in the browser.
    Ready,
    /// Composer text changed.
    DraftChanged(String),
    /// Send button clicked or Enter pressed.
    SendRequested,
    /// A session entry was clicked.
    SessionSelected(String),
    /// "New Chat" clicked.
    SessionFormOpened,
    SessionLabelChanged(String),
    SessionFormSubmitted,
    SessionFormCancelled,
    ThemeToggled,
    /// A banner appeared; schedules its dismissal.
    BannerShown(u64),
    /// Debounced window resize.
    Resized,
}

impl<B, S, U, D> ChatController<B, S, U, D>
where
    B: ChatBackend,
    S: PrefStore,
    U: UiStore,
    D: Delay,
{
    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::Ready => self.initialize().await,
            UiEvent::DraftChanged(text) => self.set_draft(text),
            UiEvent::SendRequested => self.send_message().await,
            UiEvent::SessionSelected(id) => self.switch_session(&id).await,
            UiEvent::SessionFormOpened => self.show_session_form(),
            UiEvent::SessionLabelChanged(label) => self.set_session_label(label),
            UiEvent::SessionFormSubmitted => {
                let label = self.ui.read_state(|s| s.session_form.label.clone());
                self.create_session(&label).await;
            }
            UiEvent::SessionFormCancelled => self.hide_session_form(),
            UiEvent::ThemeToggled => self.toggle_theme(),
            UiEvent::BannerShown(id) => self.expire_error(id).await,
            UiEvent::Resized => self.request_scroll(),
        }
    }
}
