#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::text::Line;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use crate::domain::models::SearchOutcome;
use crate::domain::services::AppState;

pub const PROMPT: &str = "Enter a slang term";
pub const INPUT_MARKER: &str = "> ";

fn labelled(label: &str, value: &str) -> Vec<Line<'static>> {
    let mut lines = value.lines();
    let first = lines.next().unwrap_or_default();

    let mut res = vec![Line::from(format!("{label}: {first}"))];
    res.extend(lines.map(|line| Line::from(line.to_string())));
    return res;
}

/// Lines describing the stored outcome. The first entry and the error are checked
/// independently of each other.
pub fn outcome_lines(outcome: Option<&SearchOutcome>) -> Vec<Line<'static>> {
    let mut lines = vec![];

    if let Some(entry) = outcome.and_then(|e| e.first()) {
        lines.extend(labelled("Word", &entry.word));
        lines.extend(labelled("Definition", &entry.definition));
        lines.extend(labelled("Example", &entry.example));
    }

    if let Some(err) = outcome.and_then(|e| e.error()) {
        lines.extend(labelled("Error", &err.to_string()));
    }

    return lines;
}

pub fn render(frame: &mut Frame, app_state: &AppState) {
    let [prompt_area, input_area, outcome_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    let [marker_area, field_area, _] = Layout::horizontal([
        Constraint::Length(INPUT_MARKER.len() as u16),
        Constraint::Length(app_state.search_input.width()),
        Constraint::Min(0),
    ])
    .areas(input_area);

    frame.render_widget(Paragraph::new(PROMPT), prompt_area);
    frame.render_widget(Paragraph::new(INPUT_MARKER), marker_area);
    frame.render_widget(app_state.search_input.textarea(), field_area);
    frame.render_widget(
        Paragraph::new(Text::from(outcome_lines(app_state.outcome.as_ref())))
            .wrap(Wrap { trim: false }),
        outcome_area,
    );
}
