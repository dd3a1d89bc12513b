//! Single-line text input with cursor editing
//!
//! Dashboard inputs are unvalidated strings; parsing to numeric or
//! categorical types happens when the form is submitted.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.value.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index();
            self.value.remove(byte_idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let byte_idx = self.byte_index();
            self.value.remove(byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Byte offset of the character cursor
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }

    /// Route an editing key to this field. Returns false for keys that are
    /// not editing keys so the caller can handle them.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.move_cursor_left();
                true
            }
            KeyCode::Right => {
                self.move_cursor_right();
                true
            }
            KeyCode::Home => {
                self.move_cursor_home();
                true
            }
            KeyCode::End => {
                self.move_cursor_end();
                true
            }
            _ => false,
        }
    }

    /// Render as `label: value`, drawing a block cursor when focused
    pub fn render(&self, frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![Span::styled(format!("{label}: "), label_style)];
        if focused {
            let before: String = self.value.chars().take(self.cursor).collect();
            let at: String = self
                .value
                .chars()
                .nth(self.cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = self.value.chars().skip(self.cursor + 1).collect();

            spans.push(Span::raw(before));
            spans.push(Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.value.clone()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut field = InputField::default();
        for c in "142".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value(), "142");

        field.move_cursor_left();
        field.insert_char('9');
        assert_eq!(field.value(), "1492");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = InputField::with_value("2020-01-01");
        field.backspace();
        assert_eq!(field.value(), "2020-01-0");

        field.move_cursor_home();
        field.delete();
        assert_eq!(field.value(), "020-01-0");

        // Backspace at the start is a no-op
        field.backspace();
        assert_eq!(field.value(), "020-01-0");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut field = InputField::with_value("42");
        field.move_cursor_right();
        field.move_cursor_right();
        field.insert_char('7');
        assert_eq!(field.value(), "427");

        field.move_cursor_home();
        field.move_cursor_left();
        field.insert_char('0');
        assert_eq!(field.value(), "0427");
    }

    #[test]
    fn test_handle_key_routes_editing_keys() {
        let mut field = InputField::default();
        assert!(field.handle_key(key(KeyCode::Char('7'))));
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(!field.handle_key(key(KeyCode::Tab)));
        assert_eq!(field.value(), "");
    }
}
