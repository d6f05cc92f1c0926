//! Core domain logic for the terminal interface.
//!
//! Definition records, search outcomes and the event/action vocabulary, plus the
//! services that turn keystrokes and query completions into application state.

pub mod models;
pub mod services;
