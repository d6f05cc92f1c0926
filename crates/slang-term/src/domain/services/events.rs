#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use std::io;

use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyEventKind;
use futures::stream::BoxStream;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::domain::models::Event;

pub const TICK_INTERVAL_MS: u64 = 500;

type TerminalEvents = BoxStream<'static, io::Result<CrosstermEvent>>;

pub struct EventsService {
    crossterm_events: Option<TerminalEvents>,
    events: mpsc::UnboundedReceiver<Event>,
    events_open: bool,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService::with_terminal(events, EventStream::new().boxed());
    }

    fn with_terminal(
        events: mpsc::UnboundedReceiver<Event>,
        terminal: TerminalEvents,
    ) -> EventsService {
        return EventsService {
            crossterm_events: Some(terminal),
            events,
            events_open: true,
        };
    }

    /// Only yields events from the channel and ticks. Used when no terminal is attached.
    pub fn detached(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: None,
            events,
            events_open: true,
        };
    }

    fn handle_crossterm(&self, event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Paste(text) => {
                return Some(Event::KeyboardPaste(text));
            }
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                let key = match keyevent.code {
                    crossterm::event::KeyCode::Char(c) => Key::Char(c),
                    crossterm::event::KeyCode::Enter => Key::Enter,
                    crossterm::event::KeyCode::Left => Key::Left,
                    crossterm::event::KeyCode::Right => Key::Right,
                    crossterm::event::KeyCode::Up => Key::Up,
                    crossterm::event::KeyCode::Down => Key::Down,
                    crossterm::event::KeyCode::Home => Key::Home,
                    crossterm::event::KeyCode::End => Key::End,
                    crossterm::event::KeyCode::PageUp => Key::PageUp,
                    crossterm::event::KeyCode::PageDown => Key::PageDown,
                    crossterm::event::KeyCode::Tab => Key::Tab,
                    crossterm::event::KeyCode::Delete => Key::Delete,
                    crossterm::event::KeyCode::F(n) => Key::F(n),
                    crossterm::event::KeyCode::Backspace => Key::Backspace,
                    crossterm::event::KeyCode::Esc => Key::Esc,
                    _ => return None,
                };

                let input = Input {
                    key,
                    ctrl: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::CONTROL),
                    alt: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::ALT),
                    shift: keyevent
                        .modifiers
                        .contains(crossterm::event::KeyModifiers::SHIFT),
                };

                return Some(map_input(input));
            }
            _ => return None,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv(), if self.events_open => {
                    if event.is_none() {
                        // Every sender is gone, stop polling the channel.
                        self.events_open = false;
                    }
                    event
                },
                event = next_crossterm(&mut self.crossterm_events) => match event {
                    Some(Ok(input)) => self.handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::error!(error = ?err, "failed to read terminal event");
                        return Err(err.into());
                    }
                    None => bail!("terminal input closed"),
                },
                _ = time::sleep(time::Duration::from_millis(TICK_INTERVAL_MS)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

async fn next_crossterm(
    stream: &mut Option<TerminalEvents>,
) -> Option<io::Result<CrosstermEvent>> {
    match stream {
        Some(stream) => return stream.next().await,
        None => return futures::future::pending().await,
    }
}

/// Routes the keys the application reacts to; everything else goes to the search input.
pub fn map_input(input: Input) -> Event {
    match input {
        Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } => {
            return Event::KeyboardCTRLC;
        }
        Input {
            key: Key::Enter, ..
        } => {
            return Event::KeyboardEnter;
        }
        input => {
            return Event::KeyboardCharInput(input);
        }
    }
}
