//! Customer home screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::services::{Translator, WorkerSearch};
use crate::domain::entities::{Category, Worker};

/// What the customer home screen asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerHomeAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Open a worker's profile.
    OpenWorker(Worker),
    /// Browse the full category catalogue.
    BrowseCategories,
}

/// Search-first home: fuzzy search over the directory, category
/// shortcuts, and the featured worker list.
pub struct CustomerHomeScreen {
    translator: Translator,
    workers: Vec<Worker>,
    categories: Vec<Category>,
    search: WorkerSearch,
    query: String,
    selected: usize,
}

impl CustomerHomeScreen {
    #[must_use]
    pub fn new(
        translator: Translator,
        workers: Vec<Worker>,
        categories: Vec<Category>,
        search: WorkerSearch,
    ) -> Self {
        Self {
            translator,
            workers,
            categories,
            search,
            query: String::new(),
            selected: 0,
        }
    }

    /// Workers matching the current query, best first.
    #[must_use]
    pub fn visible_workers(&self) -> Vec<&Worker> {
        self.search.filter(&self.workers, &self.query)
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> CustomerHomeAction {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected = 0;
                CustomerHomeAction::None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
                CustomerHomeAction::None
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                CustomerHomeAction::None
            }
            KeyCode::Down => {
                let count = self.visible_workers().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
                CustomerHomeAction::None
            }
            KeyCode::Enter => self
                .visible_workers()
                .get(self.selected)
                .map(|worker| CustomerHomeAction::OpenWorker((*worker).clone()))
                .unwrap_or(CustomerHomeAction::None),
            KeyCode::Tab => CustomerHomeAction::BrowseCategories,
            _ => CustomerHomeAction::Ignored,
        }
    }

    fn worker_line<'a>(&self, worker: &'a Worker, selected: bool) -> Line<'a> {
        let t = &self.translator;
        let marker_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut spans = vec![
            Span::styled(if selected { "> " } else { "  " }, marker_style),
            Span::styled(
                format!("{:<18}", worker.name()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<14}", t.t(worker.category().as_str())),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("★ {:.1}  ", worker.rating()),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("₹{}/{}", worker.hourly_rate(), t.t("hr")),
                Style::default().fg(Color::Yellow),
            ),
        ];
        if worker.is_verified() {
            spans.push(Span::styled(
                format!("  ✓ {}", t.t("verified")),
                Style::default().fg(Color::Cyan),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for &CustomerHomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [greeting_area, search_area, shortcuts_area, list_area, hint_area] =
            vertical.areas(area);

        Paragraph::new(format!("{}, Rahul", t.t("hello")))
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .render(greeting_area, buf);

        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let search_inner = search_block.inner(search_area);
        search_block.render(search_area, buf);
        let search_text = if self.query.is_empty() {
            Span::styled(
                t.t("search_placeholder"),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(self.query.as_str(), Style::default().fg(Color::White))
        };
        Paragraph::new(Line::from(search_text)).render(search_inner, buf);

        let shortcuts: Vec<Span<'_>> = self
            .categories
            .iter()
            .take(6)
            .flat_map(|category| {
                vec![
                    Span::styled(
                        format!(" {} ", t.t(category.id().as_str())),
                        Style::default().fg(Color::Black).bg(Color::Gray),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        Paragraph::new(Line::from(shortcuts)).render(shortcuts_area, buf);

        let visible = self.visible_workers();
        let rows = Layout::vertical(vec![Constraint::Length(1); usize::from(list_area.height)])
            .split(list_area);
        for (i, worker) in visible.iter().enumerate() {
            let Some(row) = rows.get(i) else { break };
            Paragraph::new(self.worker_line(worker, i == self.selected)).render(*row, buf);
        }

        Paragraph::new(format!(
            "Enter: {} | Tab: {}",
            t.t("book_now"),
            t.t("view_all")
        ))
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
            Worker::new("w4", "Suresh Electric", "electrician", 4.7, 400),
        ]
    }

    fn screen() -> CustomerHomeScreen {
        CustomerHomeScreen::new(
            Translator::default(),
            directory(),
            Vec::new(),
            WorkerSearch::new(),
        )
    }

    #[test]
    fn test_enter_opens_selected_worker() {
        let mut home = screen();
        home.handle_key(key(KeyCode::Down));
        match home.handle_key(key(KeyCode::Enter)) {
            CustomerHomeAction::OpenWorker(worker) => {
                assert_eq!(worker.name(), "Suresh Electric");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_search_narrows_list() {
        let mut home = screen();
        for c in "electr".chars() {
            home.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(home.visible_workers().len(), 1);
        match home.handle_key(key(KeyCode::Enter)) {
            CustomerHomeAction::OpenWorker(worker) => {
                assert_eq!(worker.name(), "Suresh Electric");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_enter_with_no_match_is_noop() {
        let mut home = screen();
        for c in "zzz".chars() {
            home.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(home.handle_key(key(KeyCode::Enter)), CustomerHomeAction::None);
    }

    #[test]
    fn test_tab_browses_categories() {
        let mut home = screen();
        assert_eq!(
            home.handle_key(key(KeyCode::Tab)),
            CustomerHomeAction::BrowseCategories
        );
    }
}
