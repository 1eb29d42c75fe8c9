//! Multi-step booking wizard.

use chrono::{Duration as ChronoDuration, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::dto::{BookingConfirmation, BookingQuote, BookingRequest, PaymentMethod};
use crate::application::services::Translator;
use crate::domain::entities::Worker;
use crate::presentation::widgets::TextInput;

const DATE_CHOICES: usize = 5;
const TIME_SLOTS: &[&str] = &["09:00 AM", "10:00 AM", "01:00 PM", "03:00 PM"];

/// Wizard steps, forward-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStep {
    Details,
    Review,
    Payment,
    Confirmed(BookingConfirmation),
}

/// Focusable controls on the details step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailsFocus {
    Date,
    Time,
    Description,
}

/// What the booking wizard asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Run the simulated step advance.
    Advance,
    /// Exit to the worker profile (back from step one).
    BackRequested,
    /// Confirmation acknowledged; hand off to tracking.
    TrackRequested,
}

/// Details → Review → Payment, each advance resolving through a
/// simulated task. Backward movement steps the wizard itself; only
/// step one exits the screen.
pub struct BookingScreen {
    translator: Translator,
    worker: Worker,
    quote: BookingQuote,
    step: BookingStep,
    focus: DetailsFocus,
    date_index: usize,
    time_index: usize,
    description: TextInput,
    payment_index: usize,
    busy: bool,
}

impl BookingScreen {
    #[must_use]
    pub fn new(translator: Translator, worker: Worker, quote: BookingQuote) -> Self {
        Self {
            translator,
            worker,
            quote,
            step: BookingStep::Details,
            focus: DetailsFocus::Date,
            date_index: 0,
            time_index: 1,
            description: TextInput::new("Describe the work"),
            payment_index: 0,
            busy: false,
        }
    }

    /// Current wizard step.
    #[must_use]
    pub const fn step(&self) -> &BookingStep {
        &self.step
    }

    /// Whether a simulated step advance is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// The booked worker.
    #[must_use]
    pub const fn worker(&self) -> &Worker {
        &self.worker
    }

    /// Everything the wizard collected so far.
    #[must_use]
    pub fn request(&self) -> BookingRequest {
        let date = (Local::now().date_naive()
            + ChronoDuration::days(i64::try_from(self.date_index).unwrap_or(0)))
        .format("%a %d")
        .to_string();

        BookingRequest {
            date,
            time_slot: TIME_SLOTS[self.time_index].to_string(),
            description: self.description.value().to_string(),
            payment_method: PaymentMethod::ALL[self.payment_index],
        }
    }

    /// A simulated step advance resolved.
    pub fn on_step_done(&mut self) {
        self.busy = false;
        self.step = match self.step {
            BookingStep::Details => BookingStep::Review,
            BookingStep::Review => BookingStep::Payment,
            // Payment completion is confirmed separately.
            ref other => other.clone(),
        };
    }

    /// The payment step resolved into a confirmation.
    pub fn on_confirmed(&mut self, confirmation: BookingConfirmation) {
        self.busy = false;
        self.step = BookingStep::Confirmed(confirmation);
    }

    fn step_number(&self) -> usize {
        match self.step {
            BookingStep::Details => 1,
            BookingStep::Review => 2,
            BookingStep::Payment | BookingStep::Confirmed(_) => 3,
        }
    }

    /// Handles key event, returns action.
    #[allow(clippy::too_many_lines)]
    pub fn handle_key(&mut self, key: KeyEvent) -> BookingAction {
        if self.busy {
            return BookingAction::None;
        }

        if let BookingStep::Confirmed(_) = self.step {
            return match key.code {
                KeyCode::Enter => BookingAction::TrackRequested,
                _ => BookingAction::Ignored,
            };
        }

        if key.code == KeyCode::Esc {
            // Inside the wizard, back steps one step; step one exits.
            return match self.step {
                BookingStep::Details => BookingAction::BackRequested,
                BookingStep::Review => {
                    self.step = BookingStep::Details;
                    BookingAction::None
                }
                BookingStep::Payment => {
                    self.step = BookingStep::Review;
                    BookingAction::None
                }
                BookingStep::Confirmed(_) => BookingAction::None,
            };
        }

        if key.code == KeyCode::Enter {
            self.busy = true;
            return BookingAction::Advance;
        }

        match self.step {
            BookingStep::Details => match key.code {
                KeyCode::Tab => {
                    self.focus = match self.focus {
                        DetailsFocus::Date => DetailsFocus::Time,
                        DetailsFocus::Time => DetailsFocus::Description,
                        DetailsFocus::Description => DetailsFocus::Date,
                    };
                    self.description
                        .set_focused(self.focus == DetailsFocus::Description);
                    BookingAction::None
                }
                KeyCode::Left => {
                    match self.focus {
                        DetailsFocus::Date => self.date_index = self.date_index.saturating_sub(1),
                        DetailsFocus::Time => self.time_index = self.time_index.saturating_sub(1),
                        DetailsFocus::Description => self.description.move_left(),
                    }
                    BookingAction::None
                }
                KeyCode::Right => {
                    match self.focus {
                        DetailsFocus::Date => {
                            if self.date_index + 1 < DATE_CHOICES {
                                self.date_index += 1;
                            }
                        }
                        DetailsFocus::Time => {
                            if self.time_index + 1 < TIME_SLOTS.len() {
                                self.time_index += 1;
                            }
                        }
                        DetailsFocus::Description => self.description.move_right(),
                    }
                    BookingAction::None
                }
                KeyCode::Char(c) if self.focus == DetailsFocus::Description => {
                    self.description.input_char(c);
                    BookingAction::None
                }
                KeyCode::Backspace if self.focus == DetailsFocus::Description => {
                    self.description.backspace();
                    BookingAction::None
                }
                _ => BookingAction::Ignored,
            },
            BookingStep::Review => BookingAction::Ignored,
            BookingStep::Payment => match key.code {
                KeyCode::Up => {
                    self.payment_index = self.payment_index.saturating_sub(1);
                    BookingAction::None
                }
                KeyCode::Down => {
                    if self.payment_index + 1 < PaymentMethod::ALL.len() {
                        self.payment_index += 1;
                    }
                    BookingAction::None
                }
                _ => BookingAction::Ignored,
            },
            BookingStep::Confirmed(_) => BookingAction::Ignored,
        }
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
        ]);
        let [date_label_a, date_a, time_label_a, time_a, desc_a] = vertical.areas(area);

        let focus_style = |focused: bool| {
            if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            }
        };

        Paragraph::new(t.t("select_date"))
            .style(focus_style(self.focus == DetailsFocus::Date))
            .render(date_label_a, buf);

        let today = Local::now().date_naive();
        let date_spans: Vec<Span<'_>> = (0..DATE_CHOICES)
            .flat_map(|i| {
                let label = (today + ChronoDuration::days(i64::try_from(i).unwrap_or(0)))
                    .format("%a %d")
                    .to_string();
                let style = if i == self.date_index {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                vec![Span::styled(format!(" {label} "), style), Span::raw(" ")]
            })
            .collect();
        Paragraph::new(Line::from(date_spans)).render(date_a, buf);

        Paragraph::new(t.t("select_time"))
            .style(focus_style(self.focus == DetailsFocus::Time))
            .render(time_label_a, buf);

        let time_spans: Vec<Span<'_>> = TIME_SLOTS
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| {
                let style = if i == self.time_index {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                vec![Span::styled(format!(" {slot} "), style), Span::raw(" ")]
            })
            .collect();
        Paragraph::new(Line::from(time_spans)).render(time_a, buf);

        (&self.description).render(desc_a, buf);
    }

    fn render_review(&self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;
        let quote = &self.quote;

        let lines = vec![
            Line::from(Span::styled(
                t.t("order_summary"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!(
                "{} ({} {})   ₹{}",
                t.t("service_fee"),
                BookingQuote::quoted_hours(),
                t.t("hr"),
                quote.service_fee
            )),
            Line::from(format!(
                "{}   ₹{}",
                t.t("visiting_charge"),
                quote.visiting_charge
            )),
            Line::from(format!("GST (18%)   ₹{}", quote.gst)),
            Line::default(),
            Line::from(Span::styled(
                format!("{}   ₹{}", t.t("total"), quote.total),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_payment(&self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let mut lines = vec![
            Line::from(Span::styled(
                t.t("payment_method"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (i, method) in PaymentMethod::ALL.iter().enumerate() {
            let selected = i == self.payment_index;
            lines.push(Line::from(vec![
                Span::styled(
                    if selected { "(•) " } else { "( ) " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    method.label(),
                    if selected {
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
            ]));
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn render_confirmed(&self, confirmation: &BookingConfirmation, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;
        let lines = vec![
            Line::from(Span::styled(
                t.t("booking_confirmed"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!(
                "{} {}",
                confirmation.worker_name,
                t.t("booking_msg")
            )),
            Line::from(Span::styled(
                format!("Ref: {}", confirmation.reference),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Enter: {}", t.t("track_status")),
                Style::default().fg(Color::Yellow),
            )),
        ];
        Paragraph::new(lines).centered().render(area, buf);
    }
}

impl Widget for &BookingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let title = format!(
            " Book {} — Step {} of 3 ",
            t.t(self.worker.category().as_str()),
            self.step_number()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let vertical = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [body_area, footer_area] = vertical.areas(inner);

        match &self.step {
            BookingStep::Details => self.render_details(body_area, buf),
            BookingStep::Review => self.render_review(body_area, buf),
            BookingStep::Payment => self.render_payment(body_area, buf),
            BookingStep::Confirmed(confirmation) => {
                self.render_confirmed(confirmation, body_area, buf);
            }
        }

        let footer = if self.busy {
            Line::from(Span::styled(
                "...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let label = match self.step {
                BookingStep::Payment => format!("Enter: {} ₹{}", t.t("pay"), self.quote.total),
                _ => format!("Enter: {}", t.t("continue")),
            };
            Line::from(Span::styled(
                format!("{label} | Esc: back"),
                Style::default().fg(Color::DarkGray),
            ))
        };
        Paragraph::new(footer).render(footer_area, buf);
    }
}
