//! Compact quick-launch overlay: an input line over a flat ranked list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::symbols::border::ROUNDED;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear};
use wayfinder_engine::SessionState;

use crate::app::App;
use crate::components::{self, rows};
use crate::render::{render_active_list, render_empty_message};

const WIDTH: u16 = 64;
const LIST_ROWS: u16 = 10;

pub(crate) fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;
    let area = components::centered_rect(WIDTH, LIST_ROWS + 4, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED)
        .border_style(theme.border)
        .title(Span::styled(" Search ", theme.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, _, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);
    frame.render_widget(app.input.widget(), input_area);

    match app.session.state() {
        SessionState::Results => render_results(frame, app, list_area),
        _ => render_suggestions(frame, app, list_area),
    }
}

fn render_results(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    if app.session.results().is_empty() {
        let message = format!("No matches for \"{}\"", app.session.query().trim());
        render_empty_message(frame, app, area, message);
        return;
    }
    let theme = app.theme;
    let width = area.width.saturating_sub(2);
    let items = rows::result_items(app.session.results(), width, &theme);
    render_active_list(frame, app, area, items);
}

fn render_suggestions(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let suggestions = app.session.suggestion_rows();
    if suggestions.is_empty() {
        render_empty_message(frame, app, area, "Type to search the site".to_string());
        return;
    }
    let theme = app.theme;
    let items = rows::suggestion_items(&suggestions, &theme);
    render_active_list(frame, app, area, items);
}
