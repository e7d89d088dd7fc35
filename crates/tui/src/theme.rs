//! Color themes for the chrome and both overlay surfaces.

use ratatui::style::{Color, Modifier, Style};
use wayfinder_engine::ContentKind;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub title: Style,
    pub border: Style,
    pub prompt: Style,
    pub placeholder: Style,
    pub selection: Style,
    pub dim: Style,
    pub section: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub empty: Style,
}

/// Default dark theme.
pub const SLATE: Theme = Theme {
    name: "slate",
    title: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::Rgb(71, 85, 105)),
    prompt: Style::new().fg(Color::Rgb(241, 245, 249)),
    placeholder: Style::new().fg(Color::Rgb(100, 116, 139)),
    selection: Style::new()
        .bg(Color::Rgb(51, 65, 85))
        .add_modifier(Modifier::BOLD),
    dim: Style::new().fg(Color::Rgb(148, 163, 184)),
    section: Style::new()
        .fg(Color::Rgb(125, 211, 252))
        .add_modifier(Modifier::BOLD),
    tab_active: Style::new()
        .fg(Color::Rgb(56, 189, 248))
        .add_modifier(Modifier::BOLD),
    tab_inactive: Style::new().fg(Color::Rgb(100, 116, 139)),
    empty: Style::new()
        .fg(Color::Rgb(100, 116, 139))
        .add_modifier(Modifier::ITALIC),
};

/// High-contrast theme for light terminals.
pub const LIGHT: Theme = Theme {
    name: "light",
    title: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::Rgb(148, 163, 184)),
    prompt: Style::new().fg(Color::Rgb(15, 23, 42)),
    placeholder: Style::new().fg(Color::Rgb(148, 163, 184)),
    selection: Style::new()
        .bg(Color::Rgb(186, 230, 253))
        .add_modifier(Modifier::BOLD),
    dim: Style::new().fg(Color::Rgb(71, 85, 105)),
    section: Style::new()
        .fg(Color::Rgb(3, 105, 161))
        .add_modifier(Modifier::BOLD),
    tab_active: Style::new()
        .fg(Color::Rgb(2, 132, 199))
        .add_modifier(Modifier::BOLD),
    tab_inactive: Style::new().fg(Color::Rgb(100, 116, 139)),
    empty: Style::new()
        .fg(Color::Rgb(100, 116, 139))
        .add_modifier(Modifier::ITALIC),
};

pub const BUILTINS: [Theme; 2] = [SLATE, LIGHT];

/// Names of every built-in theme, in listing order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|theme| theme.name).collect()
}

/// Look a built-in theme up by name, case-insensitively.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
        .copied()
}

#[must_use]
pub fn default_theme() -> Theme {
    SLATE
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

/// Accent color for a kind's badge, shared by every theme.
#[must_use]
pub fn kind_color(kind: ContentKind) -> Color {
    match kind {
        ContentKind::Solution => Color::Rgb(96, 165, 250),
        ContentKind::Service => Color::Rgb(45, 212, 191),
        ContentKind::Product => Color::Rgb(167, 139, 250),
        ContentKind::Blog => Color::Rgb(251, 191, 36),
        ContentKind::CaseStudy => Color::Rgb(52, 211, 153),
        ContentKind::Whitepaper => Color::Rgb(203, 213, 225),
        ContentKind::Event => Color::Rgb(251, 113, 133),
        ContentKind::Documentation => Color::Rgb(103, 232, 249),
        ContentKind::Page => Color::Rgb(156, 163, 175),
    }
}
