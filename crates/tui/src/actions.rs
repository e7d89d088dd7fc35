//! Keyboard and mouse handling for the chrome and both overlays.

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use wayfinder_engine::CommitOutcome;

use crate::app::App;
use crate::components::point_in_rect;
use crate::surfaces::SurfaceKind;

impl<'a> App<'a> {
    /// Process one keyboard event.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                // The global search chord works from anywhere.
                KeyCode::Char('k') => {
                    self.toggle_overlay();
                    return;
                }
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }
        if self.session.is_open() {
            self.handle_overlay_key(key);
        } else {
            self.handle_idle_key(key);
        }
    }

    fn handle_idle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.open_surface(SurfaceKind::Panel),
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_overlay(),
            KeyCode::Enter => self.commit_active(),
            KeyCode::Up => self.session.move_up(),
            KeyCode::Down => self.session.move_down(),
            // Facet tabs exist on the panel; the palette swallows Tab so it
            // cannot leak into the query text.
            KeyCode::Tab => {
                if self.surface == SurfaceKind::Panel {
                    self.session.cycle_filter();
                }
            }
            KeyCode::BackTab => {
                if self.surface == SurfaceKind::Panel {
                    self.session.cycle_filter_back();
                }
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.clear_recent();
            }
            _ => {
                if self.input.input(key) {
                    self.session.set_query(self.input.text());
                }
            }
        }
    }

    pub(crate) fn toggle_overlay(&mut self) {
        if self.session.is_open() {
            self.close_overlay();
        } else {
            self.open_surface(self.surface);
        }
    }

    fn open_surface(&mut self, surface: SurfaceKind) {
        self.surface = surface;
        self.input.clear();
        self.session.open();
    }

    fn close_overlay(&mut self) {
        self.session.close();
        self.input.clear();
    }

    fn commit_active(&mut self) {
        match self.session.commit() {
            Some(CommitOutcome::Navigate(href)) => {
                self.input.clear();
                self.navigate(href);
            }
            Some(CommitOutcome::Fill(text)) => self.input.set_text(&text),
            None => {}
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.session.is_open() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.session.move_up(),
            MouseEventKind::ScrollDown => self.session.move_down(),
            // A click both selects and commits, like Enter on that row.
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.row_at(mouse.column, mouse.row) {
                    self.session.select(index);
                    self.commit_active();
                }
            }
            _ => {}
        }
    }

    /// Map a screen position onto a row of the active list, using the
    /// regions cached by the latest draw.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if let Some(area) = self.layout.list
            && point_in_rect(column, row, area)
        {
            let index = self.layout.list_offset + usize::from(row - area.y);
            return (index < self.session.list_len()).then_some(index);
        }
        if let Some(area) = self.layout.recent
            && point_in_rect(column, row, area)
        {
            let index = usize::from(row - area.y);
            return (index < self.session.recent().len()).then_some(index);
        }
        if let Some(area) = self.layout.popular
            && point_in_rect(column, row, area)
        {
            let index = self.session.recent().len() + usize::from(row - area.y);
            return (index < self.session.list_len()).then_some(index);
        }
        None
    }
}
