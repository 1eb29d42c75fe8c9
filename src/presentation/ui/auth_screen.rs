//! Phone/OTP login screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::UserMode;
use crate::domain::entities::PhoneNumber;
use crate::presentation::widgets::{OtpInput, TextInput};

/// Sub-state of the login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    Phone,
    Otp,
}

/// What the auth screen asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Send a code to this number.
    RequestCode(String),
    /// Verify this code.
    VerifyCode(String),
    /// Leave the screen.
    BackRequested,
}

/// Two-step login: ten-digit phone, then a four-digit code.
pub struct AuthScreen {
    translator: Translator,
    user_mode: Option<UserMode>,
    step: AuthStep,
    phone_input: TextInput,
    otp_input: OtpInput,
    phone: Option<PhoneNumber>,
    busy: bool,
    notice: Option<String>,
}

impl AuthScreen {
    #[must_use]
    pub fn new(translator: Translator, user_mode: Option<UserMode>) -> Self {
        let mut phone_input = TextInput::new("+91")
            .numeric()
            .max_len(PhoneNumber::DIGITS)
            .placeholder("00000 00000");
        phone_input.set_focused(true);

        Self {
            translator,
            user_mode,
            step: AuthStep::Phone,
            phone_input,
            otp_input: OtpInput::new(),
            phone: None,
            busy: false,
            notice: None,
        }
    }

    /// Current sub-state.
    #[must_use]
    pub const fn step(&self) -> AuthStep {
        self.step
    }

    /// Whether a simulated operation is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// The number the code was sent to, once past the phone step.
    #[must_use]
    pub const fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// The code was sent; advance to entry.
    pub fn on_code_sent(&mut self, phone: PhoneNumber) {
        self.busy = false;
        self.phone = Some(phone);
        self.step = AuthStep::Otp;
        self.notice = None;
    }

    /// A simulated operation failed; stay put and surface the notice.
    pub fn on_error(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.notice = Some(message.into());
    }

    /// Returns to phone entry, clearing the entered digits.
    fn change_number(&mut self) {
        self.step = AuthStep::Phone;
        self.otp_input.clear();
        self.notice = None;
        self.phone_input.set_focused(true);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> AuthAction {
        // The triggering control is disabled while a request is
        // in flight; nothing else can start.
        if self.busy {
            return AuthAction::None;
        }

        if key.code == KeyCode::Esc {
            return AuthAction::BackRequested;
        }

        match self.step {
            AuthStep::Phone => match key.code {
                KeyCode::Enter => {
                    if self.phone_input.value().len() == PhoneNumber::DIGITS {
                        self.busy = true;
                        self.notice = None;
                        AuthAction::RequestCode(self.phone_input.value().to_string())
                    } else {
                        self.notice = Some(self.translator.t("whats_number").to_string());
                        AuthAction::None
                    }
                }
                KeyCode::Char(c) => {
                    self.phone_input.input_char(c);
                    AuthAction::None
                }
                KeyCode::Backspace => {
                    self.phone_input.backspace();
                    AuthAction::None
                }
                KeyCode::Left => {
                    self.phone_input.move_left();
                    AuthAction::None
                }
                KeyCode::Right => {
                    self.phone_input.move_right();
                    AuthAction::None
                }
                _ => AuthAction::Ignored,
            },
            AuthStep::Otp => match key.code {
                KeyCode::Enter => match self.otp_input.value() {
                    Some(code) => {
                        self.busy = true;
                        self.notice = None;
                        AuthAction::VerifyCode(code)
                    }
                    None => {
                        self.notice = Some(self.translator.t("enter_code_sent").to_string());
                        AuthAction::None
                    }
                },
                KeyCode::Char('c') => {
                    self.change_number();
                    AuthAction::None
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.otp_input.input_digit(c);
                    AuthAction::None
                }
                KeyCode::Backspace => {
                    self.otp_input.backspace();
                    AuthAction::None
                }
                _ => AuthAction::Ignored,
            },
        }
    }

    fn status_line(&self) -> Line<'_> {
        if self.busy {
            return Line::from(Span::styled(
                "...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        if let Some(notice) = &self.notice {
            return Line::from(Span::styled(
                notice.as_str(),
                Style::default().fg(Color::Red),
            ));
        }
        let hint = match self.step {
            AuthStep::Phone => "Enter: Get OTP | Esc: Back",
            AuthStep::Otp => "Enter: Verify | c: Change number | Esc: Back",
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    }
}

impl Widget for &AuthScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [_, title_area, desc_area, input_area, _, status_area, _, footer_area] =
            vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(40),
            Constraint::Fill(1),
        ]);
        let [_, title_col, _] = horizontal.areas(title_area);
        let [_, desc_col, _] = horizontal.areas(desc_area);
        let [_, input_col, _] = horizontal.areas(input_area);
        let [_, status_col, _] = horizontal.areas(status_area);

        let title = match self.step {
            AuthStep::Phone => t.t("whats_number"),
            AuthStep::Otp => t.t("verify_number"),
        };
        Paragraph::new(title)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_col, buf);

        let description = match self.step {
            AuthStep::Phone => match self.user_mode {
                Some(UserMode::Worker) => t.t("login_worker_desc").to_string(),
                _ => t.t("login_customer_desc").to_string(),
            },
            AuthStep::Otp => {
                let sent_to = self
                    .phone
                    .as_ref()
                    .map(PhoneNumber::display_with_prefix)
                    .unwrap_or_default();
                format!("{} {sent_to}", t.t("enter_code_sent"))
            }
        };
        Paragraph::new(description)
            .style(Style::default().fg(Color::DarkGray))
            .render(desc_col, buf);

        match self.step {
            AuthStep::Phone => (&self.phone_input).render(input_col, buf),
            AuthStep::Otp => {
                let cells = Layout::horizontal([
                    Constraint::Fill(1),
                    Constraint::Length(28),
                    Constraint::Fill(1),
                ]);
                let [_, otp_col, _] = cells.areas(input_col);
                (&self.otp_input).render(otp_col, buf);
            }
        }

        Paragraph::new(self.status_line()).render(status_col, buf);

        Paragraph::new(t.t("secure_login"))
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> AuthScreen {
        AuthScreen::new(Translator::default(), Some(UserMode::Customer))
    }

    fn type_digits(screen: &mut AuthScreen, digits: &str) {
        for c in digits.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_phone_step() {
        assert_eq!(screen().step(), AuthStep::Phone);
    }

    #[test]
    fn test_short_number_does_not_submit() {
        let mut auth = screen();
        type_digits(&mut auth, "98765");
        assert_eq!(auth.handle_key(key(KeyCode::Enter)), AuthAction::None);
        assert!(!auth.is_busy());
    }

    #[test]
    fn test_full_number_requests_code_and_disables_input() {
        let mut auth = screen();
        type_digits(&mut auth, "9876543210");

        assert_eq!(
            auth.handle_key(key(KeyCode::Enter)),
            AuthAction::RequestCode("9876543210".to_string())
        );
        assert!(auth.is_busy());
        // In flight: further keys are swallowed.
        assert_eq!(auth.handle_key(key(KeyCode::Enter)), AuthAction::None);
    }

    #[test]
    fn test_code_sent_advances_to_otp() {
        let mut auth = screen();
        type_digits(&mut auth, "9876543210");
        auth.handle_key(key(KeyCode::Enter));
        auth.on_code_sent(PhoneNumber::new("9876543210").unwrap());

        assert_eq!(auth.step(), AuthStep::Otp);
        assert!(!auth.is_busy());
    }

    #[test]
    fn test_incomplete_code_does_not_verify() {
        let mut auth = screen();
        type_digits(&mut auth, "9876543210");
        auth.handle_key(key(KeyCode::Enter));
        auth.on_code_sent(PhoneNumber::new("9876543210").unwrap());

        type_digits(&mut auth, "48");
        assert_eq!(auth.handle_key(key(KeyCode::Enter)), AuthAction::None);
    }

    #[test]
    fn test_complete_code_verifies() {
        let mut auth = screen();
        type_digits(&mut auth, "9876543210");
        auth.handle_key(key(KeyCode::Enter));
        auth.on_code_sent(PhoneNumber::new("9876543210").unwrap());

        type_digits(&mut auth, "4812");
        assert_eq!(
            auth.handle_key(key(KeyCode::Enter)),
            AuthAction::VerifyCode("4812".to_string())
        );
        assert!(auth.is_busy());
    }

    #[test]
    fn test_change_number_clears_code() {
        let mut auth = screen();
        type_digits(&mut auth, "9876543210");
        auth.handle_key(key(KeyCode::Enter));
        auth.on_code_sent(PhoneNumber::new("9876543210").unwrap());
        type_digits(&mut auth, "12");

        auth.handle_key(key(KeyCode::Char('c')));
        assert_eq!(auth.step(), AuthStep::Phone);

        // Going forward again starts from empty cells.
        auth.handle_key(key(KeyCode::Enter));
        auth.on_code_sent(PhoneNumber::new("9876543210").unwrap());
        type_digits(&mut auth, "4812");
        assert_eq!(
            auth.handle_key(key(KeyCode::Enter)),
            AuthAction::VerifyCode("4812".to_string())
        );
    }

    #[test]
    fn test_error_reenables_input() {
        let mut auth = screen();
        type_digits(&mut auth, "9876543210");
        auth.handle_key(key(KeyCode::Enter));
        assert!(auth.is_busy());

        auth.on_error("network down");
        assert!(!auth.is_busy());
        assert_eq!(auth.step(), AuthStep::Phone);
    }

    #[test]
    fn test_esc_requests_back() {
        let mut auth = screen();
        assert_eq!(
            auth.handle_key(key(KeyCode::Esc)),
            AuthAction::BackRequested
        );
    }
}
