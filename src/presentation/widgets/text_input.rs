//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line input field. Optionally numeric-only with a length cap,
/// which the phone and amount fields use.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    numeric: bool,
    max_len: Option<usize>,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            numeric: false,
            max_len: None,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Accepts only ASCII digits.
    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Caps the value length.
    #[must_use]
    pub const fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts character at cursor, honoring mode and cap.
    pub fn input_char(&mut self, c: char) {
        if self.numeric && !c.is_ascii_digit() {
            return;
        }
        if let Some(max) = self.max_len
            && self.value.chars().count() >= max
        {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_char_len() {
            self.cursor -= prev;
            self.value.remove(self.cursor);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_char_len() {
            self.cursor -= prev;
        }
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    fn prev_char_len(&self) -> Option<usize> {
        self.value[..self.cursor]
            .chars()
            .next_back()
            .map(char::len_utf8)
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let display = self.display_text();
        let paragraph = Paragraph::new(display).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            // Cursor column accounts for wide glyphs before it.
            let prefix_width = self.value[..self.cursor].width();
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + prefix_width as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("Test");
        assert!(input.value().is_empty());

        input.input_char('a');
        input.input_char('b');
        assert_eq!(input.value(), "ab");

        input.backspace();
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn test_numeric_rejects_letters() {
        let mut input = TextInput::new("Phone").numeric();
        input.input_char('9');
        input.input_char('x');
        input.input_char('8');
        assert_eq!(input.value(), "98");
    }

    #[test]
    fn test_max_len_caps_value() {
        let mut input = TextInput::new("Phone").numeric().max_len(3);
        for c in "123456".chars() {
            input.input_char(c);
        }
        assert_eq!(input.value(), "123");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("Name");
        for c in "राजू".chars() {
            input.input_char(c);
        }
        input.backspace();
        input.input_char('x');
        assert_eq!(input.value(), "राजx");

        input.move_left();
        input.move_left();
        input.move_right();
        input.backspace();
        assert_eq!(input.value(), "राx");
    }
}
