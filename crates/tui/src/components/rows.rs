//! Single-line rows for result and suggestion lists.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_truncate::UnicodeTruncateStr;
use wayfinder_engine::{Hit, Suggestion, SuggestionSource};

use crate::theme::{Theme, kind_color};

/// Column the badge occupies, including its trailing gap.
const BADGE_WIDTH: usize = 6;

/// Kind badge, title, then as much of the description as fits, dimmed.
/// `width` is the space the row may use, highlight symbol excluded.
#[must_use]
pub fn result_line(hit: &Hit<'_>, width: u16, theme: &Theme) -> Line<'static> {
    let record = hit.record;
    let badge = format!("{:<width$}", record.kind.badge(), width = BADGE_WIDTH);
    let available = usize::from(width).saturating_sub(BADGE_WIDTH);
    let (title, title_width) = record.title.unicode_truncate(available);
    let mut spans = vec![
        Span::styled(badge, Style::new().fg(kind_color(record.kind))),
        Span::styled(title.to_string(), theme.prompt),
    ];
    let remaining = available.saturating_sub(title_width);
    if remaining > 8 && !record.description.is_empty() {
        let (description, _) = record.description.unicode_truncate(remaining.saturating_sub(2));
        spans.push(Span::styled(format!("  {description}"), theme.dim));
    }
    Line::from(spans)
}

/// Suggestion row with a glyph marking where it came from.
#[must_use]
pub fn suggestion_line(suggestion: &Suggestion, theme: &Theme) -> Line<'static> {
    let (glyph, style) = match suggestion.source {
        SuggestionSource::Recent => ("↺ ", theme.dim),
        SuggestionSource::Popular => ("★ ", theme.tab_active),
    };
    Line::from(vec![
        Span::styled(glyph, style),
        Span::styled(suggestion.text.clone(), theme.prompt),
    ])
}

/// Result rows sized for a list `width` columns wide.
#[must_use]
pub fn result_items(hits: &[Hit<'_>], width: u16, theme: &Theme) -> Vec<ListItem<'static>> {
    hits.iter()
        .map(|hit| ListItem::new(result_line(hit, width, theme)))
        .collect()
}

/// Suggestion rows in the order the session lists them.
#[must_use]
pub fn suggestion_items(suggestions: &[Suggestion], theme: &Theme) -> Vec<ListItem<'static>> {
    suggestions
        .iter()
        .map(|suggestion| ListItem::new(suggestion_line(suggestion, theme)))
        .collect()
}
