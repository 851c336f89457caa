use futures::executor::block_on;

use super::is_send_key;
use crate::controller::test_support::{Call, Harness, Snapshot};
use crate::controller::*;
use crate::net::types::{ApiError, ChatReply};
use crate::state::prefs::USER_ID_KEY;
use crate::state::ui::SendPhase;
use crate::util::storage::{MemoryStore, PrefStore};

fn reply(text: &str) -> ChatReply {
    ChatReply { response: text.to_owned(), timestamp: "14:05".to_owned() }
}

fn typing(s: &Snapshot) -> bool {
    s.typing
}

fn input_enabled(s: &Snapshot) -> bool {
    s.input_enabled
}

// =============================================================
// Preconditions
// =============================================================

#[test]
fn blank_draft_sends_nothing() {
    let h = Harness::new().with_current("s-1");
    h.ctl.set_draft("   \n\t ".to_owned());

    block_on(h.ctl.send_message());

    assert_eq!(h.backend.network_calls(), 0);
    assert!(h.ui.snapshot().messages.is_empty());
}

#[test]
fn no_current_session_sends_nothing() {
    let h = Harness::new();
    h.ctl.set_draft("hello".to_owned());

    block_on(h.ctl.send_message());

    assert_eq!(h.backend.network_calls(), 0);
    let state = h.ui.snapshot();
    assert!(state.messages.is_empty());
    assert_eq!(state.draft, "hello");
}

#[test]
fn send_while_sending_is_ignored() {
    let h = Harness::new().with_current("s-1");
    h.ctl.set_draft("hello".to_owned());
    h.ui.state.borrow_mut().phase = SendPhase::Sending;

    block_on(h.ctl.send_message());

    assert_eq!(h.backend.network_calls(), 0);
}

// =============================================================
// Success
// =============================================================

#[test]
fn successful_send_renders_both_sides() {
    let store = MemoryStore::with_entries([(USER_ID_KEY, "user_abcdefghi")]);
    let h = Harness::with_store(store).with_current("s-1");
    h.backend.set_chat(Ok(reply("Ahoy!")));
    h.ctl.set_draft("  hello there  ".to_owned());

    block_on(h.ctl.dispatch(events::UiEvent::SendRequested));

    let Call::Chat(request) = &h.backend.calls()[0] else {
        panic!("expected chat call");
    };
    assert_eq!(request.message, "hello there");
    assert_eq!(request.session_id, "s-1");
    assert_eq!(request.user_id, "user_abcdefghi");

    let state = h.ui.snapshot();
    assert_eq!(state.messages.len(), 2);
    assert!(state.messages[0].is_user);
    assert!(state.messages[0].animate);
    assert_eq!(state.messages[1].content, "Ahoy!");
    assert_eq!(state.messages[1].timestamp, "14:05");
    assert!(!state.messages[1].is_user);
    assert!(state.draft.is_empty());
    assert!(state.banner.is_none());
    assert_eq!(*h.delay.slept.borrow(), vec![REPLY_DELAY_MS]);
}

#[test]
fn input_is_disabled_while_in_flight() {
    let h = Harness::new().with_current("s-1");
    h.backend.set_chat(Ok(reply("ok")));
    h.ctl.set_draft("hello".to_owned());

    block_on(h.ctl.send_message());

    assert!(h.ui.log.borrow().contains(&Snapshot { typing: true, input_enabled: false }));
}

#[test]
fn reply_for_session_switched_away_is_dropped() {
    let h = Harness::new().with_current("s-1");
    h.backend.set_chat(Ok(reply("late")));
    h.ctl.set_draft("hello".to_owned());
    let ui = h.ui.clone();
    h.delay.set_hook(move || {
        ui.state.borrow_mut().begin_switch("s-2");
    });

    block_on(h.ctl.send_message());

    let state = h.ui.snapshot();
    assert!(state.is_current("s-2"));
    assert!(state.messages.iter().all(|m| m.content != "late"));
}

// =============================================================
// Failure
// =============================================================

#[test]
fn rejected_send_keeps_user_message_and_shows_apology() {
    let h = Harness::new().with_current("s-1");
    h.backend.set_chat(Err(ApiError::Application("model down".to_owned())));
    h.ctl.set_draft("hello".to_owned());

    block_on(h.ctl.send_message());

    let state = h.ui.snapshot();
    assert_eq!(state.messages.len(), 1);
    assert!(state.messages[0].is_user);
    assert_eq!(state.banner.map(|b| b.message), Some(ERR_SEND_REJECTED.to_owned()));
    assert!(h.delay.slept.borrow().is_empty());
}

#[test]
fn typing_indicator_requests_its_own_scroll() {
    let h = Harness::new().with_current("s-1");
    h.backend.set_chat(Err(ApiError::Application("model down".to_owned())));
    h.ctl.set_draft("hello".to_owned());

    block_on(h.ctl.send_message());

    let state = h.ui.snapshot();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.scroll_seq, 2);
    assert!(state.smooth_scroll);
}

#[test]
fn network_failure_shows_connection_message() {
    let h = Harness::new().with_current("s-1");
    h.backend.set_chat(Err(ApiError::Network("offline".to_owned())));
    h.ctl.set_draft("hello".to_owned());

    block_on(h.ctl.send_message());

    assert_eq!(h.ui.snapshot().banner.map(|b| b.message), Some(ERR_NETWORK.to_owned()));
}

#[test]
fn every_outcome_recovers_to_idle_exactly_once() {
    let outcomes = [
        Ok(reply("fine")),
        Err(ApiError::Application("nope".to_owned())),
        Err(ApiError::Network("offline".to_owned())),
        Err(ApiError::Status(502)),
    ];
    for outcome in outcomes {
        let h = Harness::new().with_current("s-1");
        h.backend.set_chat(outcome);
        h.ctl.set_draft("hello".to_owned());

        block_on(h.ctl.send_message());

        let state = h.ui.snapshot();
        assert_eq!(state.phase, SendPhase::Idle);
        assert!(state.input_enabled);
        assert!(!state.typing);
        assert_eq!(h.ui.flips(typing, true), 1);
        assert_eq!(h.ui.flips(input_enabled, false), 1);
        assert_eq!(state.focus_seq, 1);
    }
}

// =============================================================
// Keys
// =============================================================

#[test]
fn enter_sends_but_shift_enter_does_not() {
    assert!(is_send_key("Enter", false));
    assert!(!is_send_key("Enter", true));
    assert!(!is_send_key("a", false));
}
