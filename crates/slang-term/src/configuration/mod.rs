//! Configuration management for the terminal interface.
//!
//! Built-in values for the dictionary endpoint, request timeout, input field limits and
//! log location, held in a process-wide key registry.

mod config;

pub use config::*;
