//! Worker onboarding wizard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::dto::EnrollmentForm;
use crate::application::services::Translator;
use crate::domain::ports::{MediaKind, MediaRef};
use crate::presentation::widgets::TextInput;

/// Skill choices offered on the form, as category ids.
const SKILLS: &[&str] = &["mason", "labour", "painter", "carpenter", "electrician", "plumber"];

/// Sub-state of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Form,
    Success,
}

/// Focusable rows of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormRow {
    ProfilePhoto,
    FullName,
    Skill,
    Experience,
    IdFront,
    IdBack,
    BankProof,
    Submit,
}

const ROWS: &[FormRow] = &[
    FormRow::ProfilePhoto,
    FormRow::FullName,
    FormRow::Skill,
    FormRow::Experience,
    FormRow::IdFront,
    FormRow::IdBack,
    FormRow::BankProof,
    FormRow::Submit,
];

/// What the onboarding screen asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Open the media picker for one document slot.
    PickMedia(MediaKind),
    /// Validate and submit the form.
    Submit,
    /// Success screen acknowledged; leave the wizard.
    Finished,
}

/// Single-form onboarding: five required fields, then a simulated
/// upload, then a verification-pending screen.
pub struct OnboardingScreen {
    translator: Translator,
    step: OnboardingStep,
    focus: usize,
    form: EnrollmentForm,
    name_input: TextInput,
    experience_input: TextInput,
    skill_index: Option<usize>,
    busy: bool,
    notice: Option<String>,
}

impl OnboardingScreen {
    #[must_use]
    pub fn new(translator: Translator) -> Self {
        Self {
            translator,
            step: OnboardingStep::Form,
            focus: 0,
            form: EnrollmentForm::default(),
            name_input: TextInput::new("Full name"),
            experience_input: TextInput::new("Years").numeric().max_len(2),
            skill_index: None,
            busy: false,
            notice: None,
        }
    }

    /// Current sub-state.
    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    /// Whether the simulated upload is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Snapshot of the form with the text fields synced in.
    #[must_use]
    pub fn form(&self) -> EnrollmentForm {
        let mut form = self.form.clone();
        form.full_name = self.name_input.value().to_string();
        form.skill = self
            .skill_index
            .map(|i| SKILLS[i].to_string())
            .unwrap_or_default();
        form.experience_years = self.experience_input.value().parse().ok();
        form
    }

    /// A picked image landed in its slot.
    pub fn on_media_picked(&mut self, kind: MediaKind, media: MediaRef) {
        match kind {
            MediaKind::ProfilePhoto => self.form.profile_photo = Some(media),
            MediaKind::IdFront => self.form.id_front = Some(media),
            MediaKind::IdBack => self.form.id_back = Some(media),
            MediaKind::BankProof => self.form.bank_proof = Some(media),
        }
    }

    /// Validation came back incomplete.
    pub fn on_incomplete(&mut self, missing: &[&str]) {
        self.busy = false;
        self.notice = Some(format!("Missing: {}", missing.join(", ")));
    }

    /// Upload finished; show the verification-pending screen.
    pub fn on_submitted(&mut self) {
        self.busy = false;
        self.step = OnboardingStep::Success;
        self.notice = None;
    }

    /// Upload failed; stay on the form.
    pub fn on_error(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.notice = Some(message.into());
    }

    fn focused_row(&self) -> FormRow {
        ROWS[self.focus]
    }

    fn sync_focus(&mut self) {
        self.name_input
            .set_focused(self.focused_row() == FormRow::FullName);
        self.experience_input
            .set_focused(self.focused_row() == FormRow::Experience);
    }

    fn cycle_skill(&mut self, forward: bool) {
        let len = SKILLS.len();
        self.skill_index = Some(match self.skill_index {
            None => 0,
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        });
    }

    /// Handles key event, returns action.
    #[allow(clippy::too_many_lines)]
    pub fn handle_key(&mut self, key: KeyEvent) -> OnboardingAction {
        if self.busy {
            return OnboardingAction::None;
        }

        if self.step == OnboardingStep::Success {
            return match key.code {
                KeyCode::Enter => OnboardingAction::Finished,
                _ => OnboardingAction::Ignored,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.focus = self.focus.saturating_sub(1);
                self.sync_focus();
                OnboardingAction::None
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.focus + 1 < ROWS.len() {
                    self.focus += 1;
                }
                self.sync_focus();
                OnboardingAction::None
            }
            KeyCode::Enter => match self.focused_row() {
                FormRow::ProfilePhoto => OnboardingAction::PickMedia(MediaKind::ProfilePhoto),
                FormRow::IdFront => OnboardingAction::PickMedia(MediaKind::IdFront),
                FormRow::IdBack => OnboardingAction::PickMedia(MediaKind::IdBack),
                FormRow::BankProof => OnboardingAction::PickMedia(MediaKind::BankProof),
                FormRow::Submit => {
                    self.busy = true;
                    self.notice = None;
                    OnboardingAction::Submit
                }
                FormRow::FullName | FormRow::Skill | FormRow::Experience => {
                    OnboardingAction::None
                }
            },
            KeyCode::Left => {
                if self.focused_row() == FormRow::Skill {
                    self.cycle_skill(false);
                }
                OnboardingAction::None
            }
            KeyCode::Right => {
                if self.focused_row() == FormRow::Skill {
                    self.cycle_skill(true);
                }
                OnboardingAction::None
            }
            KeyCode::Char(c) => match self.focused_row() {
                FormRow::FullName => {
                    self.name_input.input_char(c);
                    OnboardingAction::None
                }
                FormRow::Experience => {
                    self.experience_input.input_char(c);
                    OnboardingAction::None
                }
                _ => OnboardingAction::Ignored,
            },
            KeyCode::Backspace => match self.focused_row() {
                FormRow::FullName => {
                    self.name_input.backspace();
                    OnboardingAction::None
                }
                FormRow::Experience => {
                    self.experience_input.backspace();
                    OnboardingAction::None
                }
                _ => OnboardingAction::Ignored,
            },
            _ => OnboardingAction::Ignored,
        }
    }

    fn media_line(&self, row: FormRow, kind: MediaKind, slot: &Option<MediaRef>) -> Line<'_> {
        let focused = self.focused_row() == row;
        let marker_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let status = match slot {
            Some(media) => Span::styled(
                format!("✓ {media}"),
                Style::default().fg(Color::Green),
            ),
            None => Span::styled("(Enter to pick)", Style::default().fg(Color::DarkGray)),
        };
        Line::from(vec![
            Span::styled(if focused { "> " } else { "  " }, marker_style),
            Span::styled(
                format!("{:<14}", kind.label()),
                Style::default().fg(Color::White),
            ),
            status,
        ])
    }
}

impl Widget for &OnboardingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        if self.step == OnboardingStep::Success {
            let vertical = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Fill(1),
            ]);
            let [_, title_area, desc_area, hint_area, _] = vertical.areas(area);

            Paragraph::new(t.t("verification_pending"))
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .centered()
                .render(title_area, buf);
            Paragraph::new(t.t("verification_desc"))
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .render(desc_area, buf);
            Paragraph::new(format!("Enter: {}", t.t("continue")))
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .render(hint_area, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", t.t("complete_profile")));
        let inner = block.inner(area);
        block.render(area, buf);

        let vertical = Layout::vertical([
            Constraint::Length(1), // photo
            Constraint::Length(3), // name
            Constraint::Length(1), // skill
            Constraint::Length(3), // experience
            Constraint::Length(1), // section header
            Constraint::Length(1), // id front
            Constraint::Length(1), // id back
            Constraint::Length(1), // bank proof
            Constraint::Length(1), // submit
            Constraint::Length(1), // notice
        ]);
        let [photo_a, name_a, skill_a, exp_a, docs_a, front_a, back_a, bank_a, submit_a, notice_a] =
            vertical.areas(inner);

        Paragraph::new(self.media_line(
            FormRow::ProfilePhoto,
            MediaKind::ProfilePhoto,
            &self.form.profile_photo,
        ))
        .render(photo_a, buf);

        (&self.name_input).render(name_a, buf);

        let skill_focused = self.focused_row() == FormRow::Skill;
        let skill_label = self
            .skill_index
            .map_or("-", |i| t.t(SKILLS[i]));
        let skill_line = Line::from(vec![
            Span::styled(
                if skill_focused { "> " } else { "  " },
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("{:<14}", t.t("select_skill")),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("← {skill_label} →"),
                if skill_focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
        ]);
        Paragraph::new(skill_line).render(skill_a, buf);

        (&self.experience_input).render(exp_a, buf);

        Paragraph::new(t.t("upload_documents"))
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .render(docs_a, buf);

        Paragraph::new(self.media_line(FormRow::IdFront, MediaKind::IdFront, &self.form.id_front))
            .render(front_a, buf);
        Paragraph::new(self.media_line(FormRow::IdBack, MediaKind::IdBack, &self.form.id_back))
            .render(back_a, buf);
        Paragraph::new(self.media_line(
            FormRow::BankProof,
            MediaKind::BankProof,
            &self.form.bank_proof,
        ))
        .render(bank_a, buf);

        let submit_style = if self.focused_row() == FormRow::Submit {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let submit_label = if self.busy {
            "..."
        } else {
            t.t("submit_verification")
        };
        Paragraph::new(Span::styled(format!(" {submit_label} "), submit_style))
            .render(submit_a, buf);

        if let Some(notice) = &self.notice {
            Paragraph::new(notice.as_str())
                .style(Style::default().fg(Color::Red))
                .render(notice_a, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> OnboardingScreen {
        OnboardingScreen::new(Translator::default())
    }

    fn down(screen: &mut OnboardingScreen, times: usize) {
        for _ in 0..times {
            screen.handle_key(key(KeyCode::Down));
        }
    }

    #[test]
    fn test_enter_on_photo_row_opens_picker() {
        let mut wizard = screen();
        assert_eq!(
            wizard.handle_key(key(KeyCode::Enter)),
            OnboardingAction::PickMedia(MediaKind::ProfilePhoto)
        );
    }

    #[test]
    fn test_typing_fills_name() {
        let mut wizard = screen();
        down(&mut wizard, 1);
        for c in "Raju".chars() {
            wizard.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(wizard.form().full_name, "Raju");
    }

    #[test]
    fn test_skill_cycles() {
        let mut wizard = screen();
        down(&mut wizard, 2);
        wizard.handle_key(key(KeyCode::Right));
        assert_eq!(wizard.form().skill, "mason");
        wizard.handle_key(key(KeyCode::Right));
        assert_eq!(wizard.form().skill, "labour");
        wizard.handle_key(key(KeyCode::Left));
        assert_eq!(wizard.form().skill, "mason");
    }

    #[test]
    fn test_submit_row_submits_and_disables() {
        let mut wizard = screen();
        down(&mut wizard, ROWS.len() - 1);
        assert_eq!(
            wizard.handle_key(key(KeyCode::Enter)),
            OnboardingAction::Submit
        );
        assert!(wizard.is_busy());
        assert_eq!(wizard.handle_key(key(KeyCode::Enter)), OnboardingAction::None);
    }

    #[test]
    fn test_incomplete_reenables_form() {
        let mut wizard = screen();
        down(&mut wizard, ROWS.len() - 1);
        wizard.handle_key(key(KeyCode::Enter));
        wizard.on_incomplete(&["bank proof"]);
        assert!(!wizard.is_busy());
        assert_eq!(wizard.step(), OnboardingStep::Form);
    }

    #[test]
    fn test_media_lands_in_slot() {
        let mut wizard = screen();
        wizard.on_media_picked(MediaKind::IdBack, MediaRef::new("/tmp/back.jpg"));
        assert!(wizard.form().id_back.is_some());
    }

    #[test]
    fn test_success_screen_finishes_on_enter() {
        let mut wizard = screen();
        wizard.on_submitted();
        assert_eq!(wizard.step(), OnboardingStep::Success);
        assert_eq!(
            wizard.handle_key(key(KeyCode::Enter)),
            OnboardingAction::Finished
        );
    }
}
