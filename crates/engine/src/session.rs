//! The shared selection state machine both surfaces drive.
//!
//! A session is either idle (no overlay showing), browsing suggestions
//! (blank query), or browsing results (non-blank query). Every keystroke
//! re-ranks synchronously; the active row is clamped to the visible list
//! and never wraps. Only a committed result touches the recency history;
//! closing a surface discards the query without recording it.

use crate::index::SiteIndex;
use crate::kind::ContentKind;
use crate::query;
use crate::record::Hit;
use crate::suggest::{Suggestion, Suggestions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Suggestions,
    Results,
}

/// What a successful [`SearchSession::commit`] asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Route to this locator; the session has already closed itself.
    Navigate(String),
    /// A suggestion was adopted as the query; update the input widget.
    Fill(String),
}

pub struct SearchSession<'a> {
    index: &'a SiteIndex,
    suggestions: Suggestions,
    state: SessionState,
    query: String,
    filter: Option<ContentKind>,
    /// Ranked hits for the current query, before facet filtering.
    hits: Vec<Hit<'a>>,
    /// The facet-filtered view the surface actually shows.
    visible: Vec<Hit<'a>>,
    active: Option<usize>,
}

impl<'a> SearchSession<'a> {
    #[must_use]
    pub fn new(index: &'a SiteIndex, suggestions: Suggestions) -> Self {
        Self {
            index,
            suggestions,
            state: SessionState::Idle,
            query: String::new(),
            filter: None,
            hits: Vec::new(),
            visible: Vec::new(),
            active: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state != SessionState::Idle
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filter(&self) -> Option<ContentKind> {
        self.filter
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn index(&self) -> &'a SiteIndex {
        self.index
    }

    /// Facet-filtered results in rank order.
    #[must_use]
    pub fn results(&self) -> &[Hit<'a>] {
        &self.visible
    }

    /// Suggestion rows for the blank-query state: recent, then popular.
    #[must_use]
    pub fn suggestion_rows(&self) -> Vec<Suggestion> {
        self.suggestions.combined()
    }

    #[must_use]
    pub fn recent(&self) -> &[String] {
        self.suggestions.recent()
    }

    #[must_use]
    pub fn popular(&self) -> &[String] {
        self.suggestions.popular()
    }

    /// Per-kind counts of the current (unfiltered) hits, for facet tabs.
    #[must_use]
    pub fn facets(&self) -> Vec<(ContentKind, usize)> {
        query::facet_counts(&self.hits)
    }

    /// Length of whichever list the active index points into.
    #[must_use]
    pub fn list_len(&self) -> usize {
        match self.state {
            SessionState::Idle => 0,
            SessionState::Suggestions => self.suggestions.len(),
            SessionState::Results => self.visible.len(),
        }
    }

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        tracing::debug!("opening search session");
        self.refresh();
    }

    /// Dismiss the overlay, dropping query, facet, and selection. The
    /// recency history is deliberately left alone.
    pub fn close(&mut self) {
        self.state = SessionState::Idle;
        self.query.clear();
        self.filter = None;
        self.hits.clear();
        self.visible.clear();
        self.active = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replace the query and re-rank. Ignored while idle; surfaces only
    /// edit an open session.
    pub fn set_query(&mut self, query: &str) {
        if !self.is_open() {
            return;
        }
        self.query = query.to_string();
        self.refresh();
    }

    pub fn set_filter(&mut self, kind: Option<ContentKind>) {
        self.filter = kind;
        if self.state == SessionState::Results {
            self.visible = query::filter_by_kind(&self.hits, self.filter);
            self.reset_selection();
        }
    }

    /// Advance the facet tab: All, then each populated kind in canonical
    /// order, then back to All.
    pub fn cycle_filter(&mut self) {
        let kinds: Vec<ContentKind> = self.facets().into_iter().map(|(kind, _)| kind).collect();
        if kinds.is_empty() {
            return;
        }
        let next = match self.filter {
            None => Some(kinds[0]),
            Some(current) => match kinds.iter().position(|&kind| kind == current) {
                Some(pos) if pos + 1 < kinds.len() => Some(kinds[pos + 1]),
                _ => None,
            },
        };
        self.set_filter(next);
    }

    pub fn cycle_filter_back(&mut self) {
        let kinds: Vec<ContentKind> = self.facets().into_iter().map(|(kind, _)| kind).collect();
        if kinds.is_empty() {
            return;
        }
        let next = match self.filter {
            None => kinds.last().copied(),
            Some(current) => match kinds.iter().position(|&kind| kind == current) {
                Some(0) | None => None,
                Some(pos) => Some(kinds[pos - 1]),
            },
        };
        self.set_filter(next);
    }

    /// Jump the selection to `index` if it is in range; out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.list_len() {
            self.active = Some(index);
        }
    }

    pub fn move_up(&mut self) {
        if let Some(active) = self.active
            && active > 0
        {
            self.active = Some(active - 1);
        }
    }

    pub fn move_down(&mut self) {
        if let Some(active) = self.active
            && active + 1 < self.list_len()
        {
            self.active = Some(active + 1);
        }
    }

    /// Act on the active row.
    ///
    /// A result commit records the query, closes the session, and hands the
    /// record's locator back; a suggestion commit adopts the suggestion as
    /// the query and stays open on its results. With nothing selected this
    /// does nothing.
    pub fn commit(&mut self) -> Option<CommitOutcome> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Suggestions => {
                let active = self.active?;
                let text = self.suggestion_rows().get(active)?.text.clone();
                self.query = text.clone();
                self.refresh();
                Some(CommitOutcome::Fill(text))
            }
            SessionState::Results => {
                let hit = *self.visible.get(self.active?)?;
                let committed = self.query.clone();
                self.suggestions.record(&committed);
                tracing::debug!(id = %hit.record.id, query = %committed, "navigating to result");
                self.close();
                Some(CommitOutcome::Navigate(hit.record.href.clone()))
            }
        }
    }

    /// Forget the recent-query history.
    pub fn clear_recent(&mut self) {
        self.suggestions.clear_recent();
        if self.state == SessionState::Suggestions {
            self.reset_selection();
        }
    }

    fn refresh(&mut self) {
        if self.query.trim().is_empty() {
            self.state = SessionState::Suggestions;
            self.hits.clear();
            self.visible.clear();
        } else {
            self.state = SessionState::Results;
            self.hits = query::search(self.index, &self.query, Some(query::MAX_RESULTS));
            self.visible = query::filter_by_kind(&self.hits, self.filter);
        }
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        self.active = (self.list_len() > 0).then_some(0);
    }
}
