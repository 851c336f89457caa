//! Chat controller: the single owner of widget behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never call the backend or touch preferences directly. They map
//! DOM events onto [`UiEvent`](events::UiEvent) values and hand them to
//! [`ChatController::dispatch`]. The controller mutates [`UiState`] through a
//! [`UiStore`], so the same flows run against a `RwSignal` in the browser and
//! against a plain cell in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is logged to the console and turned into a transient
//! banner. Nothing is retried automatically; the user re-triggers the action.

pub mod events;
mod send;
mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use send::is_send_key;

use crate::net::api::{ChatBackend, HttpBackend};
use crate::state::prefs::Preferences;
use crate::state::ui::{UiState, UiStore};
use crate::util::dark_mode;
use crate::util::storage::{LocalStore, PrefStore};

pub const DEFAULT_SESSION_LABEL: &str = "Default chat session";
pub const NEW_SESSION_LABEL: &str = "New chat session";

/// Cosmetic pause before an assistant reply appears.
pub const REPLY_DELAY_MS: u32 = 300;
/// Lifetime of an error banner.
pub const BANNER_TIMEOUT_MS: u32 = 5_000;
/// Debounce for re-scrolling after a window resize.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

pub const ERR_CREATE_DEFAULT: &str = "Error creating default session";
pub const ERR_CREATE_REJECTED: &str = "Failed to create session";
pub const ERR_CREATE: &str = "Error creating session";
pub const ERR_LOAD_SESSIONS: &str = "Error loading sessions";
pub const ERR_LOAD_CONVERSATION: &str = "Error loading conversation";
pub const ERR_SEND_REJECTED: &str = "Sorry, something went wrong. Please try again.";
pub const ERR_NETWORK: &str = "Network error. Please check your connection.";

/// Asynchronous sleep used for cosmetic delays and banner expiry.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn sleep(&self, ms: u32);
}

/// `setTimeout`-backed delay; resolves immediately outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn sleep(&self, ms: u32) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::TimeoutFuture::new(ms).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ms;
        }
    }
}

/// Controller type used by the running app.
pub type AppController = ChatController<HttpBackend, LocalStore, leptos::prelude::RwSignal<UiState>, BrowserDelay>;

/// Owns the UI state handle and the backend, preference and timer seams.
#[derive(Clone, Copy, Debug)]
pub struct ChatController<B, S, U, D> {
    backend: B,
    prefs: Preferences<S>,
    ui: U,
    delay: D,
}

impl<B, S, U, D> ChatController<B, S, U, D>
where
    B: ChatBackend,
    S: PrefStore,
    U: UiStore,
    D: Delay,
{
    pub fn new(backend: B, prefs: Preferences<S>, ui: U, delay: D) -> Self {
        Self { backend, prefs, ui, delay }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn prefs(&self) -> &Preferences<S> {
        &self.prefs
    }

    /// Start-up sequence.
    ///
    /// First visits (or visits with no stored session) get a default session.
    /// Then the list is loaded and the current session's history is shown.
    pub async fn initialize(&self) {
        // The server renders light; the stored theme is only known here.
        let dark = self.prefs.dark_mode();
        self.ui.update_state(|s| s.dark_mode = dark);
        dark_mode::apply(dark);

        let stored = self.prefs.last_session_id();
        if let Some(id) = stored.as_deref() {
            self.ui.update_state(|s| s.current_session_id = Some(id.to_owned()));
        }

        let mut listed = false;
        if !self.prefs.has_visited() || stored.is_none() {
            listed = self.create_default_session().await.is_some();
            self.prefs.mark_visited();
        }
        if !listed {
            self.load_sessions().await;
        }

        if let Some(id) = self.ui.read_state(|s| s.current_session_id.clone()) {
            self.open_session(&id).await;
        }
        self.ui.update_state(|s| s.focus_seq += 1);
    }

    /// Flip the theme, persist it, and apply it to the document.
    pub fn toggle_theme(&self) {
        let mut next = false;
        self.ui.update_state(|s| {
            s.dark_mode = !s.dark_mode;
            next = s.dark_mode;
        });
        self.prefs.set_dark_mode(next);
        dark_mode::apply(next);
    }

    /// Show a transient banner; returns its id for [`Self::dismiss_error`].
    pub fn show_error(&self, message: &str) -> u64 {
        let mut id = 0;
        self.ui.update_state(|s| id = s.show_banner(message));
        id
    }

    /// Clear banner `id` if no newer banner replaced it.
    pub fn dismiss_error(&self, id: u64) {
        self.ui.update_state(|s| s.dismiss_banner(id));
    }

    /// Wait out the banner lifetime, then dismiss it.
    pub async fn expire_error(&self, id: u64) {
        self.delay.sleep(BANNER_TIMEOUT_MS).await;
        self.dismiss_error(id);
    }

    pub fn set_draft(&self, text: String) {
        self.ui.update_state(|s| s.draft = text);
    }

    /// Re-scroll the pane to the bottom without animation.
    pub fn request_scroll(&self) {
        self.ui.update_state(|s| {
            s.smooth_scroll = false;
            s.scroll_seq += 1;
        });
    }
}
