//! Customer bookings list.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::entities::{Job, JobStatus};

/// What the bookings screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingsAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
}

/// Read-only list of past and upcoming bookings.
pub struct BookingsScreen {
    translator: Translator,
    jobs: Vec<Job>,
    selected: usize,
}

impl BookingsScreen {
    #[must_use]
    pub fn new(translator: Translator, jobs: Vec<Job>) -> Self {
        Self {
            translator,
            jobs,
            selected: 0,
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> BookingsAction {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                BookingsAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.jobs.len() {
                    self.selected += 1;
                }
                BookingsAction::None
            }
            _ => BookingsAction::Ignored,
        }
    }

    fn status_style(status: JobStatus) -> Style {
        match status {
            JobStatus::Pending => Style::default().fg(Color::Yellow),
            JobStatus::Accepted | JobStatus::InProgress => Style::default().fg(Color::Cyan),
            JobStatus::Completed => Style::default().fg(Color::Green),
        }
    }
}

impl Widget for &BookingsScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]);
        let [title_area, list_area] = vertical.areas(area);

        Paragraph::new(Span::styled(
            self.translator.t("nav_track"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(title_area, buf);

        let rows =
            Layout::vertical(vec![Constraint::Length(3); self.jobs.len()]).split(list_area);
        for (i, (job, row)) in self.jobs.iter().zip(rows.iter()).enumerate() {
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
                        format!("  [{}]", job.status().label()),
                        BookingsScreen::status_style(job.status()),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {} · {} · ₹{}", job.date(), job.location(), job.amount()),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            Paragraph::new(lines).render(*row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_scroll_clamps() {
        let jobs = vec![
            Job::new("j1", "A", "Masonry Work", 1200),
            Job::new("j2", "B", "Tile Fitting", 3500),
        ];
        let mut screen = BookingsScreen::new(Translator::default(), jobs);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        for _ in 0..5 {
            screen.handle_key(down);
        }
        assert_eq!(screen.selected, 1);
    }
}
