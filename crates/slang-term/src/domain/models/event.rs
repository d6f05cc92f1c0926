use tui_textarea::Input;

use super::SearchOutcome;

#[derive(Debug)]
pub enum Event {
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardPaste(String),
    QueryCompleted(SearchOutcome),
    UITick,
}
