#[cfg(test)]
#[path = "search_input_test.rs"]
mod tests;

use ratatui::style::Modifier;
use ratatui::style::Style;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Single line text field holding the search term.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
    char_limit: usize,
    width: u16,
    placeholder: String,
    cursor_visible: bool,
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        return SearchInput::new(
            Config::char_limit(),
            Config::input_width(),
            &Config::get(ConfigKey::Placeholder),
        );
    }
}

impl<'a> SearchInput<'a> {
    pub fn new(char_limit: usize, width: u16, placeholder: &str) -> SearchInput<'a> {
        return SearchInput {
            textarea: build_textarea(placeholder),
            char_limit,
            width,
            placeholder: placeholder.to_string(),
            cursor_visible: true,
        };
    }

    /// Applies a key event and returns the resulting text. Characters past the limit and
    /// anything that would open a second line are dropped.
    pub fn input(&mut self, input: Input) -> String {
        match input {
            Input { key: Key::Enter, .. }
            | Input {
                key: Key::Char('m'),
                ctrl: true,
                ..
            }
            | Input {
                key: Key::Char('j'),
                ctrl: true,
                ..
            } => {}
            Input {
                key: Key::Char(_),
                ctrl: false,
                alt: false,
                ..
            } if self.len() >= self.char_limit => {}
            input => {
                if self.textarea.input(input) && self.len() > self.char_limit {
                    self.textarea.undo();
                }
            }
        }

        self.show_cursor();
        return self.value();
    }

    pub fn paste(&mut self, text: &str) -> String {
        let remaining = self.char_limit.saturating_sub(self.len());
        let cleaned = text
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .take(remaining)
            .collect::<String>();

        if !cleaned.is_empty() {
            self.textarea.insert_str(cleaned);
        }

        self.show_cursor();
        return self.value();
    }

    pub fn value(&self) -> String {
        return self.textarea.lines().join("");
    }

    pub fn len(&self) -> usize {
        return self.value().chars().count();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    pub fn reset(&mut self) {
        self.textarea = build_textarea(&self.placeholder);
        self.cursor_visible = true;
    }

    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
        self.apply_cursor_style();
    }

    pub fn cursor_visible(&self) -> bool {
        return self.cursor_visible;
    }

    pub fn char_limit(&self) -> usize {
        return self.char_limit;
    }

    pub fn width(&self) -> u16 {
        return self.width;
    }

    pub fn placeholder(&self) -> &str {
        return &self.placeholder;
    }

    pub fn textarea(&self) -> &TextArea<'a> {
        return &self.textarea;
    }

    fn show_cursor(&mut self) {
        if !self.cursor_visible {
            self.cursor_visible = true;
            self.apply_cursor_style();
        }
    }

    fn apply_cursor_style(&mut self) {
        if self.cursor_visible {
            self.textarea
                .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }
    }
}

fn build_textarea<'a>(placeholder: &str) -> TextArea<'a> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));

    return textarea;
}
