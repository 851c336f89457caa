//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, DOM, time)
//! and pure text helpers from component logic to improve reuse and
//! testability.

pub mod dark_mode;
pub mod datetime;
pub mod dom;
pub mod format;
pub mod storage;
pub mod user_id;
