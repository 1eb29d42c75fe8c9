//! Per-category worker listing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::entities::{CategoryId, Worker};

/// What the category listing asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Open a worker's profile.
    OpenWorker(Worker),
    /// Leave the screen.
    BackRequested,
}

/// Workers offering one service category.
pub struct CategoryScreen {
    translator: Translator,
    category: CategoryId,
    workers: Vec<Worker>,
    selected: usize,
}

impl CategoryScreen {
    /// Creates the listing for a category. The caller already resolved
    /// an unset selection to the default category.
    #[must_use]
    pub fn new(translator: Translator, category: CategoryId, workers: Vec<Worker>) -> Self {
        let workers = workers
            .into_iter()
            .filter(|worker| *worker.category() == category)
            .collect();
        Self {
            translator,
            category,
            workers,
            selected: 0,
        }
    }

    /// The listed category.
    #[must_use]
    pub const fn category(&self) -> &CategoryId {
        &self.category
    }

    /// Workers in this category.
    #[must_use]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> CategoryAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                CategoryAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.workers.len() {
                    self.selected += 1;
                }
                CategoryAction::None
            }
            KeyCode::Enter => self
                .workers
                .get(self.selected)
                .map(|worker| CategoryAction::OpenWorker(worker.clone()))
                .unwrap_or(CategoryAction::None),
            KeyCode::Esc => CategoryAction::BackRequested,
            _ => CategoryAction::Ignored,
        }
    }
}

impl Widget for &CategoryScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [title_area, list_area, hint_area] = vertical.areas(area);

        Paragraph::new(Span::styled(
            t.t(self.category.as_str()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);

        if self.workers.is_empty() {
            Paragraph::new("No workers available right now.")
                .style(Style::default().fg(Color::DarkGray))
                .render(list_area, buf);
        } else {
            let rows = Layout::vertical(vec![Constraint::Length(2); self.workers.len()])
                .split(list_area);
            for (i, (worker, row)) in self.workers.iter().zip(rows.iter()).enumerate() {
                let selected = i == self.selected;
                let name_style = if selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let lines = vec![
                    Line::from(vec![
                        Span::styled(
                            if selected { "> " } else { "  " },
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(worker.name(), name_style),
                        Span::styled(
                            format!("  ★ {:.1}", worker.rating()),
                            Style::default().fg(Color::Green),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "    ₹{}/{} · {} {} · {} {}",
                            worker.hourly_rate(),
                            t.t("hr"),
                            worker.experience_years(),
                            t.t("yrs_exp"),
                            worker.jobs_completed(),
                            t.t("jobs_completed"),
                        ),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                Paragraph::new(lines).render(*row, buf);
            }
        }

        Paragraph::new("Enter: open profile | Esc: back")
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

    fn directory() -> Vec<Worker> {
        vec![
            Worker::new("w1", "Rajesh Kumar", "mason", 4.8, 350),
            Worker::new("w2", "Vikram Singh", "labour", 4.5, 200),
            Worker::new("w7", "Dinesh Raut", "mason", 4.1, 300),
        ]
    }

    #[test]
    fn test_filters_to_category() {
        let screen = CategoryScreen::new(
            Translator::default(),
            CategoryId::new("mason"),
            directory(),
        );
        assert_eq!(screen.workers().len(), 2);
    }

    #[test]
    fn test_enter_opens_worker() {
        let mut screen = CategoryScreen::new(
            Translator::default(),
            CategoryId::new("mason"),
            directory(),
        );
        screen.handle_key(key(KeyCode::Down));
        match screen.handle_key(key(KeyCode::Enter)) {
            CategoryAction::OpenWorker(worker) => assert_eq!(worker.name(), "Dinesh Raut"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_empty_category_enter_is_noop() {
        let mut screen = CategoryScreen::new(
            Translator::default(),
            CategoryId::new("plumber"),
            directory(),
        );
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), CategoryAction::None);
    }
}
