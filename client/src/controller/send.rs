//! Chat send flow: `Idle → Sending → Idle`.
//!
//! DESIGN
//! ======
//! The user's message is rendered before the request goes out and is never
//! rolled back; a failed send leaves it in the pane and shows a banner.
//! Whatever the outcome, the flow ends back in `Idle` with input enabled, so
//! a failed or slow backend can never leave the composer stuck.

#[cfg(test)]
#[path = "send_test.rs"]
mod send_test;

use super::{ChatController, Delay, ERR_NETWORK, ERR_SEND_REJECTED, REPLY_DELAY_MS};
use crate::net::api::ChatBackend;
use crate::net::types::{ApiError, ChatRequest};
use crate::state::ui::{SendPhase, UiStore};
use crate::util::datetime;
use crate::util::storage::PrefStore;

/// Enter sends; Shift+Enter inserts a newline.
#[must_use]
pub fn is_send_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

impl<B, S, U, D> ChatController<B, S, U, D>
where
    B: ChatBackend,
    S: PrefStore,
    U: UiStore,
    D: Delay,
{
    /// Send the current draft to the current session.
    ///
    /// Silently does nothing when the draft is blank, no session is current,
    /// or a send is already in flight.
    pub async fn send_message(&self) {
        let Some((message, session_id, generation)) = self.ui.read_state(|s| {
            if s.phase == SendPhase::Sending {
                return None;
            }
            let message = s.draft.trim();
            if message.is_empty() {
                return None;
            }
            let session_id = s.current_session_id.clone()?;
            Some((message.to_owned(), session_id, s.switch_generation))
        }) else {
            return;
        };

        self.ui.update_state(|s| {
            s.push_message(message.clone(), true, datetime::now_time(), true);
            s.draft.clear();
            s.phase = SendPhase::Sending;
            s.input_enabled = false;
            s.show_typing();
        });

        let request = ChatRequest { message, session_id, user_id: self.prefs.user_id() };
        let result = self.backend.send_chat(&request).await;

        self.ui.update_state(|s| s.typing = false);
        let reply = match result {
            Ok(reply) => Some(reply),
            Err(e @ ApiError::Application(_)) => {
                log::error!("chat request rejected: {e}");
                self.show_error(ERR_SEND_REJECTED);
                None
            }
            Err(e) => {
                log::error!("chat request failed: {e}");
                self.show_error(ERR_NETWORK);
                None
            }
        };

        self.ui.update_state(|s| {
            s.phase = SendPhase::Idle;
            s.input_enabled = true;
            s.focus_seq += 1;
        });

        let Some(reply) = reply else {
            return;
        };
        self.delay.sleep(REPLY_DELAY_MS).await;
        self.ui.update_state(|s| {
            if s.switch_generation == generation && s.is_current(&request.session_id) {
                s.push_message(reply.response, false, reply.timestamp, true);
            } else {
                log::debug!("dropping reply for inactive session {}", request.session_id);
            }
        });
    }
}
