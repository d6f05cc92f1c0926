//! Infrastructure layer providing external integrations.
//!
//! HTTP clients for the dictionary services the terminal can query.

pub mod clients;
