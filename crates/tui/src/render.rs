//! Frame composition: the idle chrome plus whichever overlay is open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{HighlightSpacing, List, ListItem, Paragraph};

use crate::app::{App, LayoutCache};
use crate::components::HIGHLIGHT_SYMBOL;
use crate::surfaces::{self, SurfaceKind};

pub(crate) fn draw(frame: &mut Frame, app: &mut App) {
    app.layout = LayoutCache::default();
    draw_chrome(frame, app);
    if app.session.is_open() {
        match app.surface {
            SurfaceKind::Palette => surfaces::palette::render(frame, app),
            SurfaceKind::Panel => surfaces::panel::render(frame, app),
        }
    }
}

/// The host page behind the overlays: masthead, current location, a site
/// summary with the visit trail, and key hints.
fn draw_chrome(frame: &mut Frame, app: &App) {
    let theme = app.theme;
    let [masthead, location, body, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [title_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(masthead);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", app.site_title), theme.title)),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("ctrl+k to search ", theme.dim)).alignment(Alignment::Right),
        hint_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ▸ ", theme.tab_active),
            Span::styled(app.location.clone(), theme.prompt),
        ])),
        location,
    );

    let mut lines: Vec<Line<'static>> = vec![Line::from(Span::styled("  Browse", theme.section))];
    for (kind, count) in app.session.index().counts_by_kind() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {count:>4}  "), theme.dim),
            Span::styled(kind.label(), theme.prompt),
        ]));
    }
    if !app.visits.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("  Recently visited", theme.section)));
        for href in app.visits.iter().rev().take(5) {
            lines.push(Line::from(Span::styled(format!("    {href}"), theme.dim)));
        }
    }
    frame.render_widget(Paragraph::new(lines), body);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " ctrl+k search · / browse panel · q quit",
            theme.dim,
        )),
        hints,
    );
}

/// Render `items` as the active list, syncing the shared [`ListState`] with
/// the session's selection and caching the area for mouse hit tests.
///
/// [`ListState`]: ratatui::widgets::ListState
pub(crate) fn render_active_list(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    items: Vec<ListItem<'static>>,
) {
    let list = List::new(items)
        .highlight_style(app.theme.selection)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);
    app.list_state.select(app.session.active());
    frame.render_stateful_widget(list, area, &mut app.list_state);
    app.layout.list = Some(area);
    app.layout.list_offset = app.list_state.offset();
}

/// Centered dim message for empty lists.
pub(crate) fn render_empty_message(frame: &mut Frame, app: &App, area: Rect, message: String) {
    frame.render_widget(
        Paragraph::new(Span::styled(message, app.theme.empty)).alignment(Alignment::Center),
        area,
    );
}
