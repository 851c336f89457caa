//! Networking modules for the chat backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the four HTTP calls and `types` defines the shared wire
//! schema and error taxonomy.

pub mod api;
pub mod types;
