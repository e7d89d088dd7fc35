//! Single-line query editor wrapping [`tui_textarea::TextArea`].

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::theme::Theme;

pub struct QueryInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
    #[must_use]
    pub fn new(initial: &str, theme: &Theme) -> Self {
        let mut textarea = TextArea::new(vec![initial.to_string()]);
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea.set_style(theme.prompt);
        textarea.set_placeholder_style(theme.placeholder);
        textarea.set_placeholder_text("Search the site…");
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Current query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.textarea.lines()[0]
    }

    /// Forward an editing key; returns `true` when the text changed.
    /// Enter is swallowed so the input stays single-line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return false;
        }
        self.textarea.input(key)
    }

    /// Replace the whole text, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.textarea.select_all();
        self.textarea.cut();
    }

    /// The renderable widget; draw with `frame.render_widget(input.widget(), area)`.
    #[must_use]
    pub fn widget(&self) -> &TextArea<'a> {
        &self.textarea
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut QueryInput<'_>, text: &str) {
        for ch in text.chars() {
            assert!(input.input(press(KeyCode::Char(ch))));
        }
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut input = QueryInput::new("", &Theme::default());
        type_str(&mut input, "sonic");
        assert_eq!(input.text(), "sonic");
    }

    #[test]
    fn backspace_removes_the_previous_char() {
        let mut input = QueryInput::new("sonic", &Theme::default());
        assert!(input.input(press(KeyCode::Backspace)));
        assert_eq!(input.text(), "soni");
    }

    #[test]
    fn cursor_moves_do_not_count_as_changes() {
        let mut input = QueryInput::new("sonic", &Theme::default());
        assert!(!input.input(press(KeyCode::Left)));
        assert!(!input.input(press(KeyCode::Home)));
        assert_eq!(input.text(), "sonic");
    }

    #[test]
    fn enter_never_splits_the_line() {
        let mut input = QueryInput::new("sonic", &Theme::default());
        assert!(!input.input(press(KeyCode::Enter)));
        assert_eq!(input.text(), "sonic");
    }

    #[test]
    fn set_text_replaces_and_clear_empties() {
        let mut input = QueryInput::new("old", &Theme::default());
        input.set_text("new query");
        assert_eq!(input.text(), "new query");

        // The cursor lands at the end, so typing extends the text.
        type_str(&mut input, "!");
        assert_eq!(input.text(), "new query!");

        input.clear();
        assert_eq!(input.text(), "");
    }
}
