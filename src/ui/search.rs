//! Single-line search box backed by tui-textarea.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Search components...";

pub struct SearchBox {
    textarea: TextArea<'static>,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        Self { textarea }
    }

    /// Current text, exactly as typed
    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    pub fn set_value(&mut self, value: &str) {
        if self.value() == value {
            return;
        }
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(value);
    }

    pub fn clear(&mut self) {
        self.set_value("");
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(String::is_empty)
    }

    /// Feed a key to the text area; returns true when the text changed.
    ///
    /// Enter is not consumed, so the box stays on one line.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            return false;
        }

        let before = self.value();
        self.textarea.input(key);

        // Ctrl+M and friends can still split the line
        if self.textarea.lines().len() > 1 {
            let joined = self.value();
            self.textarea.select_all();
            self.textarea.cut();
            self.textarea.insert_str(&joined);
        }

        self.value() != before
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };

        self.textarea.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
        self.textarea.set_block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(search: &mut SearchBox, text: &str) {
        for c in text.chars() {
            search.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_updates_value() {
        let mut search = SearchBox::new();
        assert!(search.is_empty());
        assert!(search.handle_key(key(KeyCode::Char('j'))));
        type_str(&mut search, "wt");
        assert_eq!(search.value(), "jwt");
    }

    #[test]
    fn test_backspace_reports_change() {
        let mut search = SearchBox::new();
        type_str(&mut search, "ab");
        assert!(search.handle_key(key(KeyCode::Backspace)));
        assert_eq!(search.value(), "a");
    }

    #[test]
    fn test_enter_is_not_consumed() {
        let mut search = SearchBox::new();
        type_str(&mut search, "oauth");
        assert!(!search.handle_key(key(KeyCode::Enter)));
        assert_eq!(search.value(), "oauth");
    }

    #[test]
    fn test_set_value_and_clear() {
        let mut search = SearchBox::new();
        search.set_value("stripe");
        assert_eq!(search.value(), "stripe");
        search.clear();
        assert!(search.is_empty());
        assert_eq!(search.value(), "");
    }

    #[test]
    fn test_whitespace_kept_as_typed() {
        let mut search = SearchBox::new();
        type_str(&mut search, " jwt ");
        assert_eq!(search.value(), " jwt ");
    }
}
