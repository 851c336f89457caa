//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` is the single state value the view renders; `prefs` is the persisted
//! slice that survives reloads.

pub mod prefs;
pub mod ui;
