//! Widgets and layout helpers shared by both surfaces.

pub mod rows;
pub mod tabs;

use ratatui::layout::Rect;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Hit test for mouse handling.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
    if area.width == 0 || area.height == 0 {
        return false;
    }
    let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
    let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
    inside_x && inside_y
}

/// A rect of `width` x `height` centered inside `area`, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// A rect covering the given percentages of `area`, centered.
#[must_use]
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = area.height * percent_y.min(100) / 100;
    centered_rect(width, height, area)
}
