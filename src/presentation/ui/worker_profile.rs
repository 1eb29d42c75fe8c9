//! Worker profile screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::application::services::Translator;
use crate::domain::entities::Worker;

/// What the profile screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerProfileAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Start the booking wizard for this worker.
    Book,
    /// Leave the screen.
    BackRequested,
}

/// Detail view of one worker with the booking entry point.
pub struct WorkerProfileScreen {
    translator: Translator,
    worker: Worker,
}

impl WorkerProfileScreen {
    #[must_use]
    pub const fn new(translator: Translator, worker: Worker) -> Self {
        Self { translator, worker }
    }

    /// The displayed worker.
    #[must_use]
    pub const fn worker(&self) -> &Worker {
        &self.worker
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> WorkerProfileAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('b') => WorkerProfileAction::Book,
            KeyCode::Esc => WorkerProfileAction::BackRequested,
            _ => WorkerProfileAction::Ignored,
        }
    }
}

impl Widget for &WorkerProfileScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;
        let worker = &self.worker;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", worker.name()));
        let inner = block.inner(area);
        block.render(area, buf);

        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [category_a, rate_a, stats_a, _, about_title_a, about_a, hint_a] =
            vertical.areas(inner);

        Paragraph::new(Span::styled(
            t.t(worker.category().as_str()),
            Style::default().fg(Color::DarkGray),
        ))
        .render(category_a, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("₹{}", worker.hourly_rate()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("/{}", t.t("hr")), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("   ★ {:.1}", worker.rating()),
                Style::default().fg(Color::Green),
            ),
        ]))
        .render(rate_a, buf);

        let verified = if worker.is_verified() { "Yes" } else { "No" };
        Paragraph::new(Line::from(Span::styled(
            format!(
                "{} {} · {} {} · {}: {verified}",
                worker.jobs_completed(),
                t.t("jobs_completed"),
                worker.experience_years(),
                t.t("yrs_exp"),
                t.t("verified"),
            ),
            Style::default().fg(Color::Gray),
        )))
        .render(stats_a, buf);

        Paragraph::new(Span::styled(
            t.t("about"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(about_title_a, buf);

        let about = format!(
            "Skilled {} with over {} years of experience in residential and commercial projects. Specialist in high-quality finishing and timely delivery.",
            t.t(worker.category().as_str()),
            worker.experience_years(),
        );
        Paragraph::new(about)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .render(about_a, buf);

        Paragraph::new(format!("Enter: {} | Esc: back", t.t("book_now")))
            .style(Style::default().fg(Color::DarkGray))
            .render(hint_a, buf);
    }
}
