//! Fuller search overlay: facet tabs over results, sectioned suggestions
//! when the query is blank.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::symbols::border::ROUNDED;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};
use wayfinder_engine::SessionState;

use crate::app::App;
use crate::components::{self, HIGHLIGHT_SYMBOL, rows, tabs};
use crate::render::{render_active_list, render_empty_message};
use crate::theme::Theme;

pub(crate) fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;
    let area = components::centered_percent(80, 70, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED)
        .border_style(theme.border)
        .title(Span::styled(
            format!(" {} search ", app.site_title),
            theme.title,
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_area, _, context_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);
    frame.render_widget(app.input.widget(), input_area);

    match app.session.state() {
        SessionState::Results => {
            render_facet_tabs(frame, app, context_area);
            render_results(frame, app, list_area);
            render_footer(frame, app, footer_area, " enter open · tab facet · esc close");
        }
        _ => {
            render_sections(frame, app, list_area);
            render_footer(
                frame,
                app,
                footer_area,
                " enter fill · ctrl+l clear recent · esc close",
            );
        }
    }
}

fn render_facet_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme;
    let (titles, selected) = tabs::facet_tabs(&app.session);
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(theme.tab_inactive)
            .highlight_style(theme.tab_active)
            .divider("·"),
        area,
    );
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
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

/// Recent and popular queries as two labelled blocks sharing one
/// selection range, recent rows first.
fn render_sections(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme;
    let recent = app.session.recent().to_vec();
    let popular = app.session.popular().to_vec();
    if recent.is_empty() && popular.is_empty() {
        render_empty_message(frame, app, area, "Start typing to search".to_string());
        return;
    }

    let active = app.session.active();
    let mut row = area.y;
    let bottom = area.bottom();

    if !recent.is_empty() && row < bottom {
        frame.render_widget(
            Paragraph::new(Span::styled("Recent searches", theme.section)),
            Rect::new(area.x, row, area.width, 1),
        );
        row += 1;
        let height = (recent.len() as u16).min(bottom.saturating_sub(row));
        if height > 0 {
            let rows_area = Rect::new(area.x, row, area.width, height);
            render_query_rows(frame, &recent, 0, active, rows_area, &theme);
            app.layout.recent = Some(rows_area);
            row += height;
        }
        row += 1;
    }

    if !popular.is_empty() && row < bottom {
        frame.render_widget(
            Paragraph::new(Span::styled("Popular searches", theme.section)),
            Rect::new(area.x, row, area.width, 1),
        );
        row += 1;
        let height = (popular.len() as u16).min(bottom.saturating_sub(row));
        if height > 0 {
            let rows_area = Rect::new(area.x, row, area.width, height);
            render_query_rows(frame, &popular, recent.len(), active, rows_area, &theme);
            app.layout.popular = Some(rows_area);
        }
    }
}

fn render_query_rows(
    frame: &mut Frame,
    entries: &[String],
    offset: usize,
    active: Option<usize>,
    area: Rect,
    theme: &Theme,
) {
    for (row, text) in entries.iter().take(usize::from(area.height)).enumerate() {
        let selected = active == Some(offset + row);
        let symbol = if selected { HIGHLIGHT_SYMBOL } else { "  " };
        let line = Line::from(vec![
            Span::raw(symbol),
            Span::styled(text.clone(), theme.prompt),
        ]);
        let paragraph = if selected {
            Paragraph::new(line).style(theme.selection)
        } else {
            Paragraph::new(line)
        };
        frame.render_widget(
            paragraph,
            Rect::new(area.x, area.y + row as u16, area.width, 1),
        );
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, hints: &'static str) {
    frame.render_widget(Paragraph::new(Span::styled(hints, app.theme.dim)), area);
}
