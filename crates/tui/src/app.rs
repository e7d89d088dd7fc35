//! Aggregate state for the terminal front-end.
//!
//! The [`App`] owns the engine session, the query input widget, and the
//! host chrome state (current location plus the visit trail). Surfaces and
//! action handlers operate on it; nothing here touches the terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use wayfinder_engine::{ContentKind, SearchSession};

use crate::input::QueryInput;
use crate::surfaces::SurfaceKind;
use crate::theme::Theme;

/// Launch-time knobs the host resolves from config and CLI flags.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub site_title: String,
    pub surface: SurfaceKind,
    pub theme: Theme,
    /// Non-blank: the surface starts open on this query's results.
    pub initial_query: String,
    /// Pre-armed facet for the launch session only; closing drops it.
    pub initial_facet: Option<ContentKind>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            site_title: "wayfinder".to_string(),
            surface: SurfaceKind::default(),
            theme: Theme::default(),
            initial_query: String::new(),
            initial_facet: None,
        }
    }
}

/// Everywhere a browse run navigated, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOutcome {
    pub visits: Vec<String>,
}

impl BrowseOutcome {
    /// The location the run ended on, if it navigated at all.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.visits.last().map(String::as_str)
    }
}

/// Click-sensitive regions captured during the latest draw.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutCache {
    pub list: Option<Rect>,
    /// Index of the first row visible in `list`.
    pub list_offset: usize,
    pub recent: Option<Rect>,
    pub popular: Option<Rect>,
}

pub struct App<'a> {
    pub(crate) session: SearchSession<'a>,
    pub(crate) input: QueryInput<'a>,
    pub(crate) surface: SurfaceKind,
    pub(crate) theme: Theme,
    pub(crate) site_title: String,
    pub(crate) location: String,
    pub(crate) visits: Vec<String>,
    pub(crate) should_quit: bool,
    pub(crate) list_state: ListState,
    pub(crate) layout: LayoutCache,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: SearchSession<'a>, options: AppOptions) -> Self {
        let input = QueryInput::new(&options.initial_query, &options.theme);
        let mut app = Self {
            session,
            input,
            surface: options.surface,
            theme: options.theme,
            site_title: options.site_title,
            location: "/".to_string(),
            visits: Vec::new(),
            should_quit: false,
            list_state: ListState::default(),
            layout: LayoutCache::default(),
        };
        let has_query = !options.initial_query.trim().is_empty();
        if has_query || options.initial_facet.is_some() {
            app.session.open();
            if options.initial_facet.is_some() {
                app.session.set_filter(options.initial_facet);
            }
            if has_query {
                app.session.set_query(&options.initial_query);
            }
        }
        app
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn visits(&self) -> &[String] {
        &self.visits
    }

    /// Route to a committed locator: update the location line and extend
    /// the visit trail.
    pub(crate) fn navigate(&mut self, href: String) {
        tracing::info!(target = %href, "navigating");
        self.location = href.clone();
        self.visits.push(href);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        crate::render::draw(frame, self);
    }
}
