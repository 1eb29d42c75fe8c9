//! Active job screen (worker side).

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracing::{debug, info};

use crate::application::services::Translator;
use crate::domain::entities::Job;
use crate::presentation::widgets::OtpInput;

/// Stages of running a job on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    Start,
    CodeEntry,
    InProgress,
    Finish,
}

/// What the active job screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveJobAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Leave the screen.
    BackRequested,
}

/// Start → in-progress → finish, with the start gated on the code the
/// customer reads out. A wrong code surfaces an inline notice and the
/// stage does not move.
pub struct ActiveJobScreen {
    translator: Translator,
    job: Job,
    stage: JobStage,
    code_input: OtpInput,
    expected_code: String,
    started_at: Option<String>,
    notice: Option<String>,
}

impl ActiveJobScreen {
    #[must_use]
    pub fn new(translator: Translator, job: Job, expected_code: String) -> Self {
        Self {
            translator,
            job,
            stage: JobStage::Start,
            code_input: OtpInput::new(),
            expected_code,
            started_at: None,
            notice: None,
        }
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> JobStage {
        self.stage
    }

    /// The job being run.
    #[must_use]
    pub const fn job(&self) -> &Job {
        &self.job
    }

    fn try_start(&mut self) {
        let Some(code) = self.code_input.value() else {
            return;
        };
        if code == self.expected_code {
            info!(job = %self.job.id(), "Job started");
            self.stage = JobStage::InProgress;
            self.started_at = Some(Local::now().format("%I:%M %p").to_string());
            self.notice = None;
        } else {
            debug!(job = %self.job.id(), "Start code mismatch");
            self.notice = Some("Invalid code. Ask the customer again.".to_string());
            self.code_input.clear();
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ActiveJobAction {
        match self.stage {
            JobStage::Start => match key.code {
                KeyCode::Enter => {
                    self.stage = JobStage::CodeEntry;
                    ActiveJobAction::None
                }
                KeyCode::Char('g') => {
                    debug!("External maps requested");
                    ActiveJobAction::None
                }
                KeyCode::Esc => ActiveJobAction::BackRequested,
                _ => ActiveJobAction::Ignored,
            },
            JobStage::CodeEntry => match key.code {
                KeyCode::Enter => {
                    self.try_start();
                    ActiveJobAction::None
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.code_input.input_digit(c);
                    ActiveJobAction::None
                }
                KeyCode::Backspace => {
                    self.code_input.backspace();
                    ActiveJobAction::None
                }
                KeyCode::Esc => {
                    self.stage = JobStage::Start;
                    self.code_input.clear();
                    self.notice = None;
                    ActiveJobAction::None
                }
                _ => ActiveJobAction::Ignored,
            },
            JobStage::InProgress => match key.code {
                KeyCode::Enter | KeyCode::Char('f') => {
                    info!(job = %self.job.id(), "Job marked completed");
                    self.stage = JobStage::Finish;
                    ActiveJobAction::None
                }
                KeyCode::Esc => ActiveJobAction::BackRequested,
                _ => ActiveJobAction::Ignored,
            },
            JobStage::Finish => match key.code {
                KeyCode::Enter | KeyCode::Esc => ActiveJobAction::BackRequested,
                _ => ActiveJobAction::Ignored,
            },
        }
    }
}

impl Widget for &ActiveJobScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;
        let job = &self.job;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", job.job_type()));
        let inner = block.inner(area);
        block.render(area, buf);

        let vertical = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [customer_area, location_area, body_area, hint_area] = vertical.areas(inner);

        Paragraph::new(vec![
            Line::from(Span::styled(
                job.customer_name(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} · ₹{}", job.date(), job.amount()),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .render(customer_area, buf);

        Paragraph::new(Span::styled(
            format!("⌖ {}", job.location()),
            Style::default().fg(Color::Gray),
        ))
        .render(location_area, buf);

        match self.stage {
            JobStage::Start => {
                Paragraph::new(vec![
                    Line::default(),
                    Line::from(Span::styled(
                        format!("[ {} ]", t.t("start_job")),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                ])
                .centered()
                .render(body_area, buf);
            }
            JobStage::CodeEntry => {
                let rows = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ]);
                let [label_a, code_a, notice_a] = rows.areas(body_area);
                Paragraph::new(t.t("start_otp_label"))
                    .style(Style::default().fg(Color::White))
                    .render(label_a, buf);
                let cells = Layout::horizontal([
                    Constraint::Length(28),
                    Constraint::Fill(1),
                ]);
                let [code_col, _] = cells.areas(code_a);
                (&self.code_input).render(code_col, buf);
                if let Some(notice) = &self.notice {
                    Paragraph::new(notice.as_str())
                        .style(Style::default().fg(Color::Red))
                        .render(notice_a, buf);
                }
            }
            JobStage::InProgress => {
                let started = self.started_at.as_deref().unwrap_or("-");
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        t.t("work_in_progress"),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("{} {started}", t.t("started_at")),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .render(body_area, buf);
            }
            JobStage::Finish => {
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        t.t("job_done"),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("₹{} {}", job.amount(), t.t("payment_credit_msg")),
                        Style::default().fg(Color::Gray),
                    )),
                ])
                .centered()
                .render(body_area, buf);
            }
        }

        let hint = match self.stage {
            JobStage::Start => format!("Enter: {} | g: maps | Esc: back", t.t("start_job")),
            JobStage::CodeEntry => "Enter: GO | Esc: cancel".to_string(),
            JobStage::InProgress => format!("Enter: {}", t.t("mark_completed")),
            JobStage::Finish => format!("Enter: {}", t.t("back_home")),
        };
        Paragraph::new(hint)
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

    fn screen() -> ActiveJobScreen {
        ActiveJobScreen::new(Translator::default(), Job::placeholder(), "4812".to_string())
    }

    fn enter_code(job: &mut ActiveJobScreen, code: &str) {
        for c in code.chars() {
            job.handle_key(key(KeyCode::Char(c)));
        }
        job.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_correct_code_starts_job() {
        let mut job = screen();
        job.handle_key(key(KeyCode::Enter));
        assert_eq!(job.stage(), JobStage::CodeEntry);

        enter_code(&mut job, "4812");
        assert_eq!(job.stage(), JobStage::InProgress);
    }

    #[test]
    fn test_wrong_code_stays_gated() {
        let mut job = screen();
        job.handle_key(key(KeyCode::Enter));

        enter_code(&mut job, "1111");
        assert_eq!(job.stage(), JobStage::CodeEntry);

        // Retrying with the right code works; cells were cleared.
        enter_code(&mut job, "4812");
        assert_eq!(job.stage(), JobStage::InProgress);
    }

    #[test]
    fn test_finish_is_unconditional() {
        let mut job = screen();
        job.handle_key(key(KeyCode::Enter));
        enter_code(&mut job, "4812");

        job.handle_key(key(KeyCode::Enter));
        assert_eq!(job.stage(), JobStage::Finish);
    }

    #[test]
    fn test_finish_returns_home() {
        let mut job = screen();
        job.handle_key(key(KeyCode::Enter));
        enter_code(&mut job, "4812");
        job.handle_key(key(KeyCode::Enter));

        assert_eq!(
            job.handle_key(key(KeyCode::Enter)),
            ActiveJobAction::BackRequested
        );
    }

    #[test]
    fn test_esc_cancels_code_entry() {
        let mut job = screen();
        job.handle_key(key(KeyCode::Enter));
        job.handle_key(key(KeyCode::Char('4')));
        job.handle_key(key(KeyCode::Esc));
        assert_eq!(job.stage(), JobStage::Start);
    }
}
