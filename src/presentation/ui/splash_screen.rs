//! Splash and role selection screen.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

use crate::application::services::Translator;
use crate::domain::UserMode;

const LOGO_TEXT: &str = "
░███     ░███ ░██  ░███████  ░████████ ░█████████  ░██
░████   ░████      ░██          ░██    ░██     ░██ ░██
░██░██ ░██░██ ░██  ░███████     ░██    ░█████████  ░██
░██ ░███░ ░██ ░██        ░██    ░██    ░██   ░██   ░██
░██  ░█   ░██ ░██  ░███████     ░██    ░██    ░██  ░██";

/// What the splash screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// A role was confirmed.
    ModeChosen(UserMode),
}

/// Brand splash with the role chooser underneath.
pub struct SplashScreen {
    translator: Translator,
    highlighted: UserMode,
    intro_effect: Option<Effect>,
    pending_duration: Duration,
}

impl SplashScreen {
    #[must_use]
    pub fn new(translator: Translator, animations: bool) -> Self {
        let intro_effect = animations.then(|| fx::coalesce((800, Interpolation::CircOut)));

        Self {
            translator,
            highlighted: UserMode::Customer,
            intro_effect,
            pending_duration: Duration::ZERO,
        }
    }

    /// Currently highlighted role.
    #[must_use]
    pub const fn highlighted(&self) -> UserMode {
        self.highlighted
    }

    /// Accumulates animation time.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> SplashAction {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.highlighted = match self.highlighted {
                    UserMode::Customer => UserMode::Worker,
                    UserMode::Worker => UserMode::Customer,
                };
                SplashAction::None
            }
            KeyCode::Enter => SplashAction::ModeChosen(self.highlighted),
            _ => SplashAction::Ignored,
        }
    }

    fn render_role_card(
        &self,
        area: Rect,
        buf: &mut Buffer,
        mode: UserMode,
        title_key: &str,
        subtitle_key: &str,
    ) {
        let t = &self.translator;
        let is_highlighted = self.highlighted == mode;
        let border_style = if is_highlighted {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                t.t(title_key),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                t.t(subtitle_key),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(Text::from(lines)).render(inner, buf);
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.translator;

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [_, logo_area, tagline_area, customer_area, worker_area, hint_area, _] =
            vertical.areas(area);

        let logo = Text::from(LOGO_TEXT.trim_matches('\n')).centered();
        Paragraph::new(logo)
            .style(Style::default().fg(Color::Yellow))
            .render(logo_area, buf);

        Paragraph::new(t.t("tagline_customer"))
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(tagline_area, buf);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(46),
            Constraint::Fill(1),
        ]);
        let [_, customer_card, _] = horizontal.areas(customer_area);
        let [_, worker_card, _] = horizontal.areas(worker_area);

        self.render_role_card(
            customer_card,
            buf,
            UserMode::Customer,
            "i_need_workers",
            "hire_masons",
        );
        self.render_role_card(
            worker_card,
            buf,
            UserMode::Worker,
            "i_am_worker",
            "find_jobs",
        );

        Paragraph::new(format!("{} | Enter", t.t("choose_role")))
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(hint_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = &mut self.intro_effect
            && effect.process(duration.into(), buf, logo_area).is_none()
        {
            return;
        }
        self.intro_effect = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> SplashScreen {
        SplashScreen::new(Translator::default(), false)
    }

    #[test]
    fn test_customer_highlighted_first() {
        assert_eq!(screen().highlighted(), UserMode::Customer);
    }

    #[test]
    fn test_toggle_role() {
        let mut splash = screen();
        splash.handle_key(key(KeyCode::Down));
        assert_eq!(splash.highlighted(), UserMode::Worker);
        splash.handle_key(key(KeyCode::Tab));
        assert_eq!(splash.highlighted(), UserMode::Customer);
    }

    #[test]
    fn test_enter_chooses_role() {
        let mut splash = screen();
        splash.handle_key(key(KeyCode::Down));
        assert_eq!(
            splash.handle_key(key(KeyCode::Enter)),
            SplashAction::ModeChosen(UserMode::Worker)
        );
    }
}
