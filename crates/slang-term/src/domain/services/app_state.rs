use anyhow::Result;
use tokio::sync::mpsc;

use super::SearchInput;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::SearchOutcome;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps<'a> {
    pub search_input: SearchInput<'a>,
}

impl Default for AppStateProps<'_> {
    fn default() -> Self {
        return AppStateProps {
            search_input: SearchInput::default(),
        };
    }
}

/// UI state owned by the event loop. Only the loop mutates it.
pub struct AppState<'a> {
    pub search_input: SearchInput<'a>,
    pub outcome: Option<SearchOutcome>,
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps<'a>) -> AppState<'a> {
        return AppState {
            search_input: props.search_input,
            outcome: None,
        };
    }

    /// Applies one event. Returns `true` when the loop should stop.
    pub fn handle_event(
        &mut self,
        event: Event,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        match event {
            Event::KeyboardCTRLC => {
                tracing::debug!("quit requested");
                return Ok(true);
            }
            Event::KeyboardEnter => {
                let term = self.search_input.value();
                self.search_input.reset();
                tracing::debug!(term = term.as_str(), "submitting query");
                tx.send(Action::Query(term))?;
            }
            Event::KeyboardPaste(text) => {
                self.search_input.paste(&text);
            }
            Event::KeyboardCharInput(input) => {
                self.search_input.input(input);
            }
            Event::QueryCompleted(outcome) => {
                self.handle_query_completed(outcome);
            }
            Event::UITick => {
                self.search_input.blink();
            }
        }

        return Ok(false);
    }

    pub fn handle_query_completed(&mut self, outcome: SearchOutcome) {
        self.outcome = Some(outcome);
    }
}
