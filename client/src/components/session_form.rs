//! Inline form for creating a session with a system prompt.

use leptos::prelude::*;

use crate::app::use_dispatch;
use crate::controller::events::UiEvent;
use crate::state::ui::UiState;

#[component]
pub fn SessionForm() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = use_dispatch();
    let prompt_ref = NodeRef::<leptos::html::Textarea>::new();

    let open = Memo::new(move |_| ui.with(|s| s.session_form.open));
    let form_focus_seq = Memo::new(move |_| ui.with(|s| s.form_focus_seq));

    Effect::new(move || {
        if form_focus_seq.get() == 0 {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            // The form becomes visible in the same update; focus after layout.
            request_animation_frame(move || {
                if let Some(el) = prompt_ref.get_untracked() {
                    let _ = el.focus();
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(UiEvent::SessionFormSubmitted);
    };

    view! {
        <form id="session-form" class="session-form" class:active=move || open.get() on:submit=on_submit>
            <textarea
                id="system-prompt"
                node_ref=prompt_ref
                rows="3"
                placeholder="Enter a system prompt for this chat..."
                prop:value=move || ui.with(|s| s.session_form.label.clone())
                on:input=move |ev| dispatch(UiEvent::SessionLabelChanged(event_target_value(&ev)))
            ></textarea>
            <div class="session-form__actions">
                <button id="save-session-btn" type="submit">
                    "Create"
                </button>
                <button
                    id="cancel-session-btn"
                    type="button"
                    on:click=move |_| dispatch(UiEvent::SessionFormCancelled)
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
