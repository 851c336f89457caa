//! Sidebar list of chat sessions.
//!
//! Each row shows the session label and creation date; the active row tracks
//! `UiState::current_session_id`. A trailing "New Chat" row opens the form.

#[cfg(test)]
#[path = "session_list_test.rs"]
mod session_list_test;

use leptos::prelude::*;

use crate::app::use_dispatch;
use crate::controller::events::UiEvent;
use crate::state::ui::{UiState, session_label};
use crate::util::datetime::session_date;

/// Text of the trailing row that opens the new-session form.
pub(crate) const NEW_CHAT_LABEL: &str = " New Chat";

/// Event the "New Chat" row dispatches.
pub(crate) const NEW_CHAT_EVENT: UiEvent = UiEvent::SessionFormOpened;

/// One rendered sidebar row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SessionRow {
    pub session_id: String,
    pub label: String,
    pub date: String,
    pub active: bool,
}

/// Sidebar rows in list order, with the current session marked active.
pub(crate) fn session_rows(state: &UiState) -> Vec<SessionRow> {
    state
        .sessions
        .iter()
        .map(|s| SessionRow {
            session_id: s.session_id.clone(),
            label: session_label(&s.system_prompt).to_owned(),
            date: session_date(&s.created_at),
            active: state.is_current(&s.session_id),
        })
        .collect()
}

#[component]
fn SessionItem(row: SessionRow) -> impl IntoView {
    let dispatch = use_dispatch();
    let SessionRow { session_id, label, date, active } = row;

    view! {
        <div
            class="session-item"
            class:active=active
            on:click=move |_| dispatch(UiEvent::SessionSelected(session_id.clone()))
        >
            <div class="session-info">
                <div class="session-prompt">{label}</div>
                <div class="session-date">{date}</div>
            </div>
        </div>
    }
}

#[component]
pub fn SessionList() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = use_dispatch();

    view! {
        <div id="sessions-list" class="sessions-list">
            <For
                each=move || ui.with(session_rows)
                key=|row| (row.session_id.clone(), row.active)
                children=move |row| view! { <SessionItem row/> }
            />
            <div class="session-item new-session" on:click=move |_| dispatch(NEW_CHAT_EVENT)>
                <div class="session-info">
                    <div class="session-prompt">
                        <i class="fas fa-plus"></i>
                        {NEW_CHAT_LABEL}
                    </div>
                </div>
            </div>
        </div>
    }
}
