//! Live tracking screen (customer side).

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::entities::Worker;

/// Where the worker is on their way to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    OnWay,
    Reached,
    Started,
}

/// What the tracking screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Open the chat with the worker.
    OpenChat,
}

/// Cosmetic map with a progress marker; after the simulated travel
/// time the worker "reaches" and the start code card appears. None of
/// this feeds back into navigation state.
pub struct TrackingScreen {
    translator: Translator,
    worker: Option<Worker>,
    status: TrackingStatus,
    elapsed: Duration,
    travel: Duration,
    start_code: String,
}

impl TrackingScreen {
    #[must_use]
    pub fn new(
        translator: Translator,
        worker: Option<Worker>,
        travel: Duration,
        start_code: String,
    ) -> Self {
        Self {
            translator,
            worker,
            status: TrackingStatus::OnWay,
            elapsed: Duration::ZERO,
            travel,
            start_code,
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> TrackingStatus {
        self.status
    }

    /// Route progress, `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.status {
            TrackingStatus::OnWay => {
                (self.elapsed.as_secs_f64() / self.travel.as_secs_f64()).min(1.0)
            }
            TrackingStatus::Reached | TrackingStatus::Started => 1.0,
        }
    }

    /// Advances the simulated journey.
    pub fn tick(&mut self, duration: Duration) {
        if self.status == TrackingStatus::OnWay {
            self.elapsed = self.elapsed.saturating_add(duration);
            if self.elapsed >= self.travel {
                self.status = TrackingStatus::Reached;
            }
        }
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> TrackingAction {
        match key.code {
            KeyCode::Char('m') => TrackingAction::OpenChat,
            _ => TrackingAction::Ignored,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_map(&self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        // Street grid.
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let on_grid = (x - area.left()) % 10 == 0 || (y - area.top()) % 4 == 0;
                let symbol = if on_grid { "·" } else { " " };
                buf[(x, y)]
                    .set_symbol(symbol)
                    .set_style(Style::default().fg(Color::DarkGray));
            }
        }

        // Diagonal route from top-left to the home marker.
        let steps = u32::from(area.width.saturating_sub(2));
        let progress_step = (f64::from(steps) * self.progress()) as u32;
        for i in 0..steps {
            let x = area.left() + 1 + i as u16;
            let y = area.top() + ((u32::from(area.height.saturating_sub(2)) * i / steps.max(1)) as u16);
            let passed = i <= progress_step;
            let style = if passed {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Blue)
            };
            buf[(x, y)].set_symbol("━").set_style(style);

            if i == progress_step && self.status == TrackingStatus::OnWay {
                buf[(x, y)]
                    .set_symbol("◆")
                    .set_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            }
        }

        // Customer home marker at the route's end.
        let home_x = area.right().saturating_sub(2);
        let home_y = area.bottom().saturating_sub(2);
        buf[(home_x, home_y)]
            .set_symbol("⌂")
            .set_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    }
}

impl Widget for &TrackingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(1),
        ]);
        let [map_area, code_area, card_area, hint_area] = vertical.areas(area);

        self.render_map(map_area, buf);

        if self.status == TrackingStatus::Reached {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(" {} ", t.t("otp_for_start")));
            let inner = block.inner(code_area);
            block.render(code_area, buf);
            Paragraph::new(Line::from(vec![
                Span::styled(
                    &self.start_code,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", t.t("otp_desc")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .render(inner, buf);
        }

        let headline = match self.status {
            TrackingStatus::OnWay => t.t("status_on_way"),
            TrackingStatus::Reached => t.t("status_reached"),
            TrackingStatus::Started => t.t("status_started"),
        };
        let mut card_lines = vec![Line::from(Span::styled(
            headline,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(worker) = &self.worker {
            card_lines.push(Line::from(Span::styled(
                format!(
                    "{} · ★ {:.1} · {}",
                    worker.name(),
                    worker.rating(),
                    t.t(worker.category().as_str())
                ),
                Style::default().fg(Color::Gray),
            )));
        }
        if self.status == TrackingStatus::OnWay {
            let minutes_left =
                (self.travel.saturating_sub(self.elapsed).as_secs() / 60).max(1);
            card_lines.push(Line::from(Span::styled(
                format!("{} ~{minutes_left} min", t.t("arriving_in")),
                Style::default().fg(Color::Yellow),
            )));
        }
        Paragraph::new(card_lines).render(card_area, buf);

        Paragraph::new(format!("m: {}", t.t("chat")))
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

    fn screen() -> TrackingScreen {
        TrackingScreen::new(
            Translator::default(),
            None,
            Duration::from_secs(10),
            "4812".to_string(),
        )
    }

    #[test]
    fn test_progress_advances_with_ticks() {
        let mut tracking = screen();
        assert_eq!(tracking.status(), TrackingStatus::OnWay);
        assert!(tracking.progress() < 0.01);

        tracking.tick(Duration::from_secs(5));
        assert!((tracking.progress() - 0.5).abs() < 0.01);
        assert_eq!(tracking.status(), TrackingStatus::OnWay);
    }

    #[test]
    fn test_reaches_after_travel_time() {
        let mut tracking = screen();
        tracking.tick(Duration::from_secs(11));
        assert_eq!(tracking.status(), TrackingStatus::Reached);
        assert!((tracking.progress() - 1.0).abs() < f64::EPSILON);

        // Further ticks change nothing.
        tracking.tick(Duration::from_secs(60));
        assert_eq!(tracking.status(), TrackingStatus::Reached);
    }

    #[test]
    fn test_chat_shortcut() {
        let mut tracking = screen();
        assert_eq!(
            tracking.handle_key(key(KeyCode::Char('m'))),
            TrackingAction::OpenChat
        );
    }
}
