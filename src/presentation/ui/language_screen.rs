//! Language selection screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::Language;
use crate::domain::language::ALL_LANGUAGES;

const GRID_COLUMNS: usize = 2;

/// What the language screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// A language was confirmed.
    Chosen(Language),
}

/// First screen of the app: a two-column grid of languages.
pub struct LanguageScreen {
    highlighted: usize,
}

impl LanguageScreen {
    /// Creates the screen, optionally pre-highlighting a configured
    /// language.
    #[must_use]
    pub fn new(preselected: Option<Language>) -> Self {
        let highlighted = preselected
            .and_then(|lang| ALL_LANGUAGES.iter().position(|l| *l == lang))
            .unwrap_or(0);
        Self { highlighted }
    }

    /// Currently highlighted language.
    #[must_use]
    pub fn highlighted(&self) -> Language {
        ALL_LANGUAGES[self.highlighted]
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LanguageAction {
        let count = ALL_LANGUAGES.len();
        match key.code {
            KeyCode::Up => {
                if self.highlighted >= GRID_COLUMNS {
                    self.highlighted -= GRID_COLUMNS;
                }
                LanguageAction::None
            }
            KeyCode::Down => {
                if self.highlighted + GRID_COLUMNS < count {
                    self.highlighted += GRID_COLUMNS;
                }
                LanguageAction::None
            }
            KeyCode::Left => {
                if self.highlighted % GRID_COLUMNS > 0 {
                    self.highlighted -= 1;
                }
                LanguageAction::None
            }
            KeyCode::Right => {
                if self.highlighted % GRID_COLUMNS + 1 < GRID_COLUMNS && self.highlighted + 1 < count
                {
                    self.highlighted += 1;
                }
                LanguageAction::None
            }
            KeyCode::Enter => LanguageAction::Chosen(self.highlighted()),
            _ => LanguageAction::Ignored,
        }
    }
}

impl Widget for &LanguageScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [_, title_area, subtitle_area, grid_area, hint_area] = vertical.areas(area);

        Paragraph::new("Choose Language")
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .centered()
            .render(title_area, buf);

        Paragraph::new("भाषा चुनें / மொழியைத் தேர்ந்தெடுக்கவும்")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(subtitle_area, buf);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(44),
            Constraint::Fill(1),
        ]);
        let [_, grid, _] = horizontal.areas(grid_area);

        let rows = ALL_LANGUAGES.len().div_ceil(GRID_COLUMNS);
        let row_areas = Layout::vertical(vec![Constraint::Length(3); rows]).split(grid);

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row_area);
            for col in 0..GRID_COLUMNS {
                let index = row * GRID_COLUMNS + col;
                let Some(language) = ALL_LANGUAGES.get(index) else {
                    continue;
                };

                let is_highlighted = index == self.highlighted;
                let border_style = if is_highlighted {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style);
                let inner = block.inner(cells[col]);
                block.render(cells[col], buf);

                let line = Line::from(vec![
                    Span::styled(
                        language.native_name(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", language.english_name()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                Paragraph::new(line).render(inner, buf);
            }
        }

        Paragraph::new("↑↓←→ move | Enter: Continue")
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_on_first_language() {
        let screen = LanguageScreen::new(None);
        assert_eq!(screen.highlighted(), Language::En);
    }

    #[test]
    fn test_preselection_from_config() {
        let screen = LanguageScreen::new(Some(Language::Ta));
        assert_eq!(screen.highlighted(), Language::Ta);
    }

    #[test]
    fn test_grid_movement() {
        let mut screen = LanguageScreen::new(None);
        screen.handle_key(key(KeyCode::Right));
        assert_eq!(screen.highlighted(), Language::Hi);
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(screen.highlighted(), Language::Bn);
        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.highlighted(), Language::Mr);
    }

    #[test]
    fn test_enter_confirms_highlighted() {
        let mut screen = LanguageScreen::new(None);
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            LanguageAction::Chosen(Language::Mr)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut screen = LanguageScreen::new(None);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('x'))),
            LanguageAction::Ignored
        );
    }
}
