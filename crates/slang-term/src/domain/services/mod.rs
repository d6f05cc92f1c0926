pub mod actions;
pub mod app_state;
pub mod events;
pub mod search_input;

pub use actions::ActionsService;
pub use app_state::AppState;
pub use app_state::AppStateProps;
pub use events::EventsService;
pub use search_input::SearchInput;
