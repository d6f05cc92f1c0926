//! Application layer orchestrating the terminal interface.
//!
//! Command-line parsing and tracing setup, the main UI loop, and the view that
//! turns application state into a frame.

pub mod cli;
pub mod ui;
pub mod view;
