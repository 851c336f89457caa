//! Transient error banner.
//!
//! Each newly shown banner is reported back as `UiEvent::BannerShown` so the
//! controller can expire it; a replaced banner's expiry is a no-op.

use leptos::prelude::*;

use crate::app::use_dispatch;
use crate::controller::events::UiEvent;
use crate::state::ui::UiState;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let dispatch = use_dispatch();

    let banner_id = Memo::new(move |_| ui.with(|s| s.banner.as_ref().map(|b| b.id)));

    Effect::new(move || {
        if let Some(id) = banner_id.get() {
            dispatch(UiEvent::BannerShown(id));
        }
    });

    view! {
        <div id="error-message" class="error-message" class:active=move || banner_id.get().is_some() role="alert">
            {move || ui.with(|s| s.banner.as_ref().map(|b| b.message.clone()).unwrap_or_default())}
        </div>
    }
}
