//! Worker home screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::entities::{Job, JobStatus};

/// Static demo figure shown on the earnings card.
const TODAYS_EARNINGS: u32 = 1250;

/// What the worker home screen asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerHomeAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// A job request was accepted.
    AcceptJob(Job),
}

/// Job inbox: online toggle, pending requests, today's earnings.
pub struct WorkerHomeScreen {
    translator: Translator,
    requests: Vec<Job>,
    online: bool,
    selected: usize,
}

impl WorkerHomeScreen {
    #[must_use]
    pub fn new(translator: Translator, jobs: Vec<Job>) -> Self {
        let requests = jobs
            .into_iter()
            .filter(|job| job.status() == JobStatus::Pending)
            .collect();
        Self {
            translator,
            requests,
            online: true,
            selected: 0,
        }
    }

    /// Whether the worker is accepting requests.
    #[must_use]
    pub const fn is_online(&self) -> bool {
        self.online
    }

    /// Pending requests still visible.
    #[must_use]
    pub fn requests(&self) -> &[Job] {
        &self.requests
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> WorkerHomeAction {
        match key.code {
            KeyCode::Char('o') => {
                self.online = !self.online;
                WorkerHomeAction::None
            }
            KeyCode::Up if self.online => {
                self.selected = self.selected.saturating_sub(1);
                WorkerHomeAction::None
            }
            KeyCode::Down if self.online => {
                if self.selected + 1 < self.requests.len() {
                    self.selected += 1;
                }
                WorkerHomeAction::None
            }
            KeyCode::Char('r') if self.online => {
                if self.selected < self.requests.len() {
                    self.requests.remove(self.selected);
                    self.selected = self.selected.min(self.requests.len().saturating_sub(1));
                }
                WorkerHomeAction::None
            }
            KeyCode::Enter if self.online => self
                .requests
                .get(self.selected)
                .map(|job| WorkerHomeAction::AcceptJob(job.clone()))
                .unwrap_or(WorkerHomeAction::None),
            _ => WorkerHomeAction::Ignored,
        }
    }
}

impl Widget for &WorkerHomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [header_area, earnings_area, section_area, list_area, hint_area] =
            vertical.areas(area);

        let (status_label, status_color) = if self.online {
            (t.t("online"), Color::Green)
        } else {
            (t.t("offline"), Color::Red)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}, Raju  ", t.t("hello")),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("● {status_label}"), Style::default().fg(status_color)),
        ]))
        .render(header_area, buf);

        let earnings_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let earnings_inner = earnings_block.inner(earnings_area);
        earnings_block.render(earnings_area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{}: ", t.t("todays_earnings")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("₹{TODAYS_EARNINGS}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   [{}]", t.t("withdraw")),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .render(earnings_inner, buf);

        Paragraph::new(Span::styled(
            t.t("new_job_requests"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(section_area, buf);

        if !self.online {
            Paragraph::new(t.t("offline"))
                .style(Style::default().fg(Color::DarkGray))
                .render(list_area, buf);
        } else {
            let rows = Layout::vertical(vec![Constraint::Length(3); self.requests.len()])
                .split(list_area);
            for (i, (job, row)) in self.requests.iter().zip(rows.iter()).enumerate() {
                let selected = i == self.selected;
                let lines = vec![
                    Line::from(vec![
                        Span::styled(
                            if selected { "> " } else { "  " },
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(
                            job.job_type(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  ₹{}", job.amount()),
                            Style::default().fg(Color::Yellow),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!("    {} · {}", job.location(), job.description()),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                Paragraph::new(lines).render(*row, buf);
            }
        }

        Paragraph::new(format!(
            "Enter: {} | r: {} | o: {}/{}",
            t.t("accept"),
            t.t("reject"),
            t.t("online"),
            t.t("offline")
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

    fn inbox() -> Vec<Job> {
        vec![
            Job::new("j1", "Suresh Raina", "Masonry Work", 1200),
            Job::new("j2", "Anita Desai", "Tile Fitting", 3500).with_status(JobStatus::Completed),
            Job::new("j3", "Kiran Rao", "Wall Painting", 2800),
        ]
    }

    #[test]
    fn test_only_pending_requests_shown() {
        let home = WorkerHomeScreen::new(Translator::default(), inbox());
        assert_eq!(home.requests().len(), 2);
    }

    #[test]
    fn test_accept_returns_selected_job() {
        let mut home = WorkerHomeScreen::new(Translator::default(), inbox());
        home.handle_key(key(KeyCode::Down));
        match home.handle_key(key(KeyCode::Enter)) {
            WorkerHomeAction::AcceptJob(job) => assert_eq!(job.job_type(), "Wall Painting"),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_reject_removes_request() {
        let mut home = WorkerHomeScreen::new(Translator::default(), inbox());
        home.handle_key(key(KeyCode::Char('r')));
        assert_eq!(home.requests().len(), 1);
    }

    #[test]
    fn test_offline_blocks_accepting() {
        let mut home = WorkerHomeScreen::new(Translator::default(), inbox());
        home.handle_key(key(KeyCode::Char('o')));
        assert!(!home.is_online());
        assert_eq!(home.handle_key(key(KeyCode::Enter)), WorkerHomeAction::Ignored);
    }
}
