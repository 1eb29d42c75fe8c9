//! Profile screen, shared by both roles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::Language;

/// Menu rows, top to bottom. Only logout does anything today; the
/// rest are static affordances from the design.
const MENU_KEYS: &[&str] = &[
    "edit_profile",
    "saved_addresses",
    "settings",
    "help_support",
    "logout",
];

/// What the profile screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Sign out.
    LogoutRequested,
}

/// Identity card plus the account menu.
pub struct ProfileScreen {
    translator: Translator,
    language: Language,
    selected: usize,
}

impl ProfileScreen {
    #[must_use]
    pub const fn new(translator: Translator, language: Language) -> Self {
        Self {
            translator,
            language,
            selected: 0,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ProfileAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ProfileAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < MENU_KEYS.len() {
                    self.selected += 1;
                }
                ProfileAction::None
            }
            KeyCode::Enter => {
                if MENU_KEYS[self.selected] == "logout" {
                    ProfileAction::LogoutRequested
                } else {
                    ProfileAction::None
                }
            }
            _ => ProfileAction::Ignored,
        }
    }
}

impl Widget for &ProfileScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [identity_area, language_area, _, menu_area] = vertical.areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "Rahul Sharma",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "+91 98765 43210",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .render(identity_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}: ", t.t("language")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                self.language.native_name(),
                Style::default().fg(Color::White),
            ),
        ]))
        .render(language_area, buf);

        let rows =
            Layout::vertical(vec![Constraint::Length(1); MENU_KEYS.len()]).split(menu_area);
        for (i, (key, row)) in MENU_KEYS.iter().zip(rows.iter()).enumerate() {
            let selected = i == self.selected;
            let is_logout = *key == "logout";
            let style = if is_logout {
                Style::default().fg(Color::Red)
            } else if selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let line = Line::from(vec![
                Span::styled(
                    if selected { "> " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(t.t(key), style),
            ]);
            Paragraph::new(line).render(*row, buf);
        }
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
    fn test_menu_rows_do_nothing() {
        let mut profile = ProfileScreen::new(Translator::default(), Language::En);
        assert_eq!(profile.handle_key(key(KeyCode::Enter)), ProfileAction::None);
    }

    #[test]
    fn test_logout_row_requests_logout() {
        let mut profile = ProfileScreen::new(Translator::default(), Language::En);
        for _ in 0..MENU_KEYS.len() {
            profile.handle_key(key(KeyCode::Down));
        }
        assert_eq!(
            profile.handle_key(key(KeyCode::Enter)),
            ProfileAction::LogoutRequested
        );
    }
}
