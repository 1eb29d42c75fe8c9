//! All-categories catalogue screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::entities::{Category, CategoryId, CategoryKind};

/// What the categories screen asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoriesAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Open the worker listing for this category.
    OpenCategory(CategoryId),
    /// Leave the screen.
    BackRequested,
}

/// Full catalogue grouped by section.
pub struct CategoriesScreen {
    translator: Translator,
    categories: Vec<Category>,
    selected: usize,
}

impl CategoriesScreen {
    #[must_use]
    pub fn new(translator: Translator, categories: Vec<Category>) -> Self {
        Self {
            translator,
            categories,
            selected: 0,
        }
    }

    /// Currently highlighted category.
    #[must_use]
    pub fn selected(&self) -> Option<&Category> {
        self.categories.get(self.selected)
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> CategoriesAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                CategoriesAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.categories.len() {
                    self.selected += 1;
                }
                CategoriesAction::None
            }
            KeyCode::Enter => self
                .selected()
                .map(|category| CategoriesAction::OpenCategory(category.id().clone()))
                .unwrap_or(CategoriesAction::None),
            KeyCode::Esc => CategoriesAction::BackRequested,
            _ => CategoriesAction::Ignored,
        }
    }
}

impl Widget for &CategoriesScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [list_area, hint_area] = vertical.areas(area);

        let mut lines: Vec<Line<'_>> = Vec::new();
        let mut last_kind: Option<CategoryKind> = None;
        for (i, category) in self.categories.iter().enumerate() {
            if last_kind != Some(category.kind()) {
                last_kind = Some(category.kind());
                lines.push(Line::from(Span::styled(
                    category.kind().label(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )));
            }

            let selected = i == self.selected;
            lines.push(Line::from(vec![
                Span::styled(
                    if selected { "> " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    t.t(category.id().as_str()),
                    if selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ]));
        }

        Paragraph::new(lines).render(list_area, buf);

        Paragraph::new("Enter: open | Esc: back")
            .style(Style::default().fg(Color::DarkGray))
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

    fn catalogue() -> Vec<Category> {
        vec![
            Category::new("mason", "Mason", CategoryKind::Home),
            Category::new("welder", "Welder", CategoryKind::Industrial),
            Category::new("architect", "Architect", CategoryKind::Professional),
        ]
    }

    #[test]
    fn test_enter_opens_selected_category() {
        let mut screen = CategoriesScreen::new(Translator::default(), catalogue());
        screen.handle_key(key(KeyCode::Down));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            CategoriesAction::OpenCategory(CategoryId::new("welder"))
        );
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut screen = CategoriesScreen::new(Translator::default(), catalogue());
        screen.handle_key(key(KeyCode::Up));
        assert_eq!(screen.selected().map(Category::name), Some("Mason"));
        for _ in 0..10 {
            screen.handle_key(key(KeyCode::Down));
        }
        assert_eq!(screen.selected().map(Category::name), Some("Architect"));
    }

    #[test]
    fn test_esc_requests_back() {
        let mut screen = CategoriesScreen::new(Translator::default(), catalogue());
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            CategoriesAction::BackRequested
        );
    }
}
