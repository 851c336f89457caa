//! Persisted client preferences.
//!
//! DESIGN
//! ======
//! Four flat keys, stored as plain strings with no expiry, validation, or
//! migration. Key names are shared with any earlier deployment of the widget,
//! so they must not change.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::util::storage::PrefStore;
use crate::util::{dark_mode, user_id};

pub const LAST_SESSION_KEY: &str = "lastSessionId";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const HAS_VISITED_KEY: &str = "hasVisited";
pub const USER_ID_KEY: &str = "userId";

/// Typed view over a [`PrefStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PrefStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn last_session_id(&self) -> Option<String> {
        self.store.get(LAST_SESSION_KEY).filter(|id| !id.is_empty())
    }

    pub fn set_last_session_id(&self, session_id: &str) {
        self.store.set(LAST_SESSION_KEY, session_id);
    }

    /// Stored theme flag, or the system preference when nothing is stored.
    pub fn dark_mode(&self) -> bool {
        match self.store.get(DARK_MODE_KEY) {
            Some(value) => value == "true",
            None => dark_mode::system_prefers_dark(),
        }
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" });
    }

    pub fn has_visited(&self) -> bool {
        self.store.get(HAS_VISITED_KEY).is_some_and(|v| !v.is_empty())
    }

    pub fn mark_visited(&self) {
        self.store.set(HAS_VISITED_KEY, "true");
    }

    /// Anonymous user id; generated and persisted on first use.
    pub fn user_id(&self) -> String {
        if let Some(id) = self.store.get(USER_ID_KEY).filter(|id| !id.is_empty()) {
            return id;
        }
        let id = user_id::generate();
        self.store.set(USER_ID_KEY, &id);
        id
    }
}
