//! Session creation, listing, and switching.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::{
    ChatController, DEFAULT_SESSION_LABEL, Delay, ERR_CREATE, ERR_CREATE_DEFAULT, ERR_CREATE_REJECTED,
    ERR_LOAD_CONVERSATION, ERR_LOAD_SESSIONS, NEW_SESSION_LABEL,
};
use crate::net::api::ChatBackend;
use crate::net::types::ApiError;
use crate::state::ui::UiStore;
use crate::util::datetime;
use crate::util::storage::PrefStore;

impl<B, S, U, D> ChatController<B, S, U, D>
where
    B: ChatBackend,
    S: PrefStore,
    U: UiStore,
    D: Delay,
{
    /// Create the fixed-label default session and make it current.
    ///
    /// Returns the new id, or `None` after surfacing the failure; state is
    /// left unchanged on failure.
    pub async fn create_default_session(&self) -> Option<String> {
        match self.backend.create_session(DEFAULT_SESSION_LABEL).await {
            Ok(id) => {
                self.prefs.set_last_session_id(&id);
                self.ui.update_state(|s| s.current_session_id = Some(id.clone()));
                self.load_sessions().await;
                Some(id)
            }
            Err(e) => {
                log::error!("error creating default session: {e}");
                self.show_error(ERR_CREATE_DEFAULT);
                None
            }
        }
    }

    /// Create a session from the form label (blank → default label) and
    /// switch to it. On failure the previous session stays active and the
    /// form stays open.
    pub async fn create_session(&self, label: &str) {
        let label = if label.trim().is_empty() { NEW_SESSION_LABEL } else { label };

        match self.backend.create_session(label).await {
            Ok(id) => {
                self.prefs.set_last_session_id(&id);
                self.ui.update_state(|s| s.current_session_id = Some(id.clone()));
                self.load_sessions().await;
                // A fresh session has no history to fetch.
                self.ui.update_state(|s| {
                    s.begin_switch(&id);
                });
                self.hide_session_form();
            }
            Err(e) => {
                log::error!("error creating session: {e}");
                let message = if matches!(e, ApiError::Application(_)) { ERR_CREATE_REJECTED } else { ERR_CREATE };
                self.show_error(message);
            }
        }
    }

    /// Refresh the session list. Returns whether the list was replaced; on
    /// failure the previously rendered list is kept.
    pub async fn load_sessions(&self) -> bool {
        match self.backend.list_sessions().await {
            Ok(sessions) => {
                self.ui.update_state(|s| {
                    s.sessions = sessions;
                    if let Some(id) = s.current_session_id.clone() {
                        s.header_label = s.label_for(&id);
                    }
                });
                true
            }
            Err(e) => {
                log::error!("error loading sessions: {e}");
                self.show_error(ERR_LOAD_SESSIONS);
                false
            }
        }
    }

    /// Switch to `session_id`; a no-op when it is already current.
    pub async fn switch_session(&self, session_id: &str) {
        if self.ui.read_state(|s| s.is_current(session_id)) {
            return;
        }
        self.open_session(session_id).await;
    }

    /// Make `session_id` current and render its history, even if it is
    /// already current.
    ///
    /// The pane is cleared before the fetch and not restored on failure. A
    /// response that arrives after a newer switch is dropped.
    pub async fn open_session(&self, session_id: &str) {
        self.prefs.set_last_session_id(session_id);
        let mut generation = 0;
        self.ui.update_state(|s| generation = s.begin_switch(session_id));

        match self.backend.conversation(session_id).await {
            Ok(turns) => self.ui.update_state(|s| {
                if s.switch_generation != generation {
                    log::debug!("dropping stale conversation for {session_id}");
                    return;
                }
                for turn in turns {
                    let is_user = turn.is_user();
                    let timestamp = datetime::message_time(&turn.timestamp);
                    s.push_message(turn.content, is_user, timestamp, false);
                }
                s.header_label = s.label_for(session_id);
            }),
            Err(e) => {
                log::error!("error switching session: {e}");
                if self.ui.read_state(|s| s.switch_generation == generation) {
                    self.show_error(ERR_LOAD_CONVERSATION);
                }
            }
        }
    }

    pub fn show_session_form(&self) {
        self.ui.update_state(|s| {
            s.session_form.open = true;
            s.form_focus_seq += 1;
        });
    }

    /// Close the form and clear its label.
    pub fn hide_session_form(&self) {
        self.ui.update_state(|s| {
            s.session_form.open = false;
            s.session_form.label.clear();
        });
    }

    pub fn set_session_label(&self, label: String) {
        self.ui.update_state(|s| s.session_form.label = label);
    }
}
