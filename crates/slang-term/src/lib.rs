//! Terminal client for looking up slang on Urban Dictionary.
//!
//! A single screen with a search field: type a term, press Enter, and the first
//! definition returned by the dictionary API is shown underneath. Each lookup runs as a
//! detached background task that reports back to the UI loop.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{
    Action, DefinitionEntry, DictionaryClient, DictionaryName, Event, QueryError, SearchOutcome,
};
pub use domain::services::{AppState, AppStateProps, SearchInput};
pub use infrastructure::clients::DictionaryClientManager;
