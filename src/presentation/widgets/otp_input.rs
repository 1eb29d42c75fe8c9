//! One-time-code entry widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Four per-digit cells with auto-advance: typing fills the active
/// cell and moves right, backspace clears and moves left.
#[derive(Debug, Clone)]
pub struct OtpInput {
    digits: [Option<char>; Self::LEN],
    active: usize,
}

impl OtpInput {
    /// Number of cells.
    pub const LEN: usize = 4;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            digits: [None; Self::LEN],
            active: 0,
        }
    }

    /// Accepts one digit into the active cell and advances.
    pub fn input_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.digits[self.active].is_none() || self.active + 1 == Self::LEN {
            self.digits[self.active] = Some(c);
        }
        if self.active + 1 < Self::LEN {
            self.active += 1;
        }
    }

    /// Clears the current cell, or steps back and clears that one.
    pub fn backspace(&mut self) {
        if self.digits[self.active].is_some() {
            self.digits[self.active] = None;
        } else if self.active > 0 {
            self.active -= 1;
            self.digits[self.active] = None;
        }
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.digits = [None; Self::LEN];
        self.active = 0;
    }

    /// Whether all cells are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// The entered code, once complete.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        if self.is_complete() {
            Some(self.digits.iter().flatten().collect())
        } else {
            None
        }
    }
}

impl Default for OtpInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &OtpInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells =
            Layout::horizontal([Constraint::Length(7); OtpInput::LEN]).split(area);

        for (i, cell) in cells.iter().enumerate() {
            let is_active = i == self.active;
            let border_style = if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let inner = block.inner(*cell);
            block.render(*cell, buf);

            if let Some(digit) = self.digits[i] {
                let paragraph = Paragraph::new(digit.to_string())
                    .style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                    .centered();
                paragraph.render(inner, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_advance() {
        let mut input = OtpInput::new();
        input.input_digit('4');
        input.input_digit('8');
        input.input_digit('1');
        assert!(!input.is_complete());

        input.input_digit('2');
        assert_eq!(input.value(), Some("4812".to_string()));
    }

    #[test]
    fn test_backspace_steps_back() {
        let mut input = OtpInput::new();
        input.input_digit('1');
        input.input_digit('2');

        // Active cell is empty; backspace clears the previous one.
        input.backspace();
        input.input_digit('3');
        input.input_digit('4');
        input.input_digit('5');
        assert_eq!(input.value(), Some("1345".to_string()));
    }

    #[test]
    fn test_rejects_non_digits() {
        let mut input = OtpInput::new();
        input.input_digit('a');
        input.input_digit('!');
        assert!(!input.is_complete());
        input.input_digit('1');
        input.input_digit('2');
        input.input_digit('3');
        input.input_digit('4');
        assert!(input.is_complete());
    }

    #[test]
    fn test_clear() {
        let mut input = OtpInput::new();
        for c in "4812".chars() {
            input.input_digit(c);
        }
        input.clear();
        assert!(!input.is_complete());
        assert_eq!(input.value(), None);
    }
}
