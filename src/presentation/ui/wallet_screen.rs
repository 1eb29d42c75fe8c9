//! Wallet screen, shared by both roles.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::ports::WalletSnapshot;
use crate::presentation::widgets::TextInput;

/// Sub-state of the wallet screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalletMode {
    View,
    TopUp,
}

/// What the wallet screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Run the simulated top-up.
    TopUpRequested(u32),
}

/// Balance card with ledger and the top-up sub-flow. `Wallet` and
/// `Earnings` both land here; only the nav label differs.
pub struct WalletScreen {
    translator: Translator,
    snapshot: WalletSnapshot,
    mode: WalletMode,
    amount_input: TextInput,
    busy: bool,
    scroll: usize,
}

impl WalletScreen {
    #[must_use]
    pub fn new(translator: Translator, snapshot: WalletSnapshot) -> Self {
        let mut amount_input = TextInput::new("Amount (₹)").numeric().max_len(6);
        amount_input.set_focused(true);

        Self {
            translator,
            snapshot,
            mode: WalletMode::View,
            amount_input,
            busy: false,
            scroll: 0,
        }
    }

    /// Current balance shown.
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.snapshot.balance
    }

    /// Whether the simulated top-up is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// The top-up resolved with a fresh snapshot.
    pub fn on_wallet_updated(&mut self, snapshot: WalletSnapshot) {
        self.busy = false;
        self.mode = WalletMode::View;
        self.amount_input.clear();
        self.snapshot = snapshot;
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> WalletAction {
        if self.busy {
            return WalletAction::None;
        }

        match self.mode {
            WalletMode::View => match key.code {
                KeyCode::Char('t') => {
                    self.mode = WalletMode::TopUp;
                    WalletAction::None
                }
                KeyCode::Up => {
                    self.scroll = self.scroll.saturating_sub(1);
                    WalletAction::None
                }
                KeyCode::Down => {
                    if self.scroll + 1 < self.snapshot.transactions.len() {
                        self.scroll += 1;
                    }
                    WalletAction::None
                }
                _ => WalletAction::Ignored,
            },
            WalletMode::TopUp => match key.code {
                KeyCode::Enter => match self.amount_input.value().parse::<u32>() {
                    Ok(amount) if amount > 0 => {
                        self.busy = true;
                        WalletAction::TopUpRequested(amount)
                    }
                    _ => WalletAction::None,
                },
                KeyCode::Esc => {
                    self.mode = WalletMode::View;
                    self.amount_input.clear();
                    WalletAction::None
                }
                KeyCode::Char(c) => {
                    self.amount_input.input_char(c);
                    WalletAction::None
                }
                KeyCode::Backspace => {
                    self.amount_input.backspace();
                    WalletAction::None
                }
                _ => WalletAction::Ignored,
            },
        }
    }
}

impl Widget for &WalletScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = &self.translator;

        let vertical = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [balance_area, topup_area, section_area, ledger_area, hint_area] =
            vertical.areas(area);

        let balance_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let balance_inner = balance_block.inner(balance_area);
        balance_block.render(balance_area, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                t.t("total_balance"),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("₹{}.00", self.snapshot.balance),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .render(balance_inner, buf);

        if self.mode == WalletMode::TopUp {
            (&self.amount_input).render(topup_area, buf);
        }

        Paragraph::new(Span::styled(
            t.t("recent_transactions"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .render(section_area, buf);

        let rows =
            Layout::vertical(vec![Constraint::Length(2); usize::from(ledger_area.height) / 2])
                .split(ledger_area);
        for (transaction, row) in self
            .snapshot
            .transactions
            .iter()
            .skip(self.scroll)
            .zip(rows.iter())
        {
            let amount_color = match transaction.kind() {
                crate::domain::entities::TransactionKind::Credit => Color::Green,
                crate::domain::entities::TransactionKind::Debit => Color::Red,
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        transaction.description(),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!(
                            "  {}₹{}",
                            transaction.kind().sign(),
                            transaction.amount()
                        ),
                        Style::default().fg(amount_color),
                    ),
                ]),
                Line::from(Span::styled(
                    transaction.date(),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            Paragraph::new(lines).render(*row, buf);
        }

        let hint = match self.mode {
            WalletMode::View => format!("t: {} | ↑↓: {}", t.t("top_up"), t.t("history")),
            WalletMode::TopUp => {
                if self.busy {
                    "...".to_string()
                } else {
                    format!("Enter: {} | Esc: cancel", t.t("top_up"))
                }
            }
        };
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Transaction, TransactionKind};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn snapshot() -> WalletSnapshot {
        WalletSnapshot {
            balance: 4250,
            transactions: vec![Transaction::new(
                "t1",
                TransactionKind::Debit,
                1200,
                "20 Oct, 2023",
                "Payment to Rajesh K.",
            )],
        }
    }

    fn screen() -> WalletScreen {
        WalletScreen::new(Translator::default(), snapshot())
    }

    #[test]
    fn test_top_up_flow() {
        let mut wallet = screen();
        wallet.handle_key(key(KeyCode::Char('t')));
        for c in "500".chars() {
            wallet.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(
            wallet.handle_key(key(KeyCode::Enter)),
            WalletAction::TopUpRequested(500)
        );
        assert!(wallet.is_busy());
    }

    #[test]
    fn test_empty_amount_does_not_submit() {
        let mut wallet = screen();
        wallet.handle_key(key(KeyCode::Char('t')));
        assert_eq!(wallet.handle_key(key(KeyCode::Enter)), WalletAction::None);
        assert!(!wallet.is_busy());
    }

    #[test]
    fn test_update_applies_snapshot_and_resets() {
        let mut wallet = screen();
        wallet.handle_key(key(KeyCode::Char('t')));
        for c in "500".chars() {
            wallet.handle_key(key(KeyCode::Char(c)));
        }
        wallet.handle_key(key(KeyCode::Enter));

        let mut updated = snapshot();
        updated.balance = 4750;
        wallet.on_wallet_updated(updated);

        assert_eq!(wallet.balance(), 4750);
        assert!(!wallet.is_busy());
        // Back in view mode: 't' opens the sub-flow again.
        assert_eq!(wallet.handle_key(key(KeyCode::Char('t'))), WalletAction::None);
    }

    #[test]
    fn test_letters_ignored_in_amount() {
        let mut wallet = screen();
        wallet.handle_key(key(KeyCode::Char('t')));
        wallet.handle_key(key(KeyCode::Char('x')));
        assert_eq!(wallet.handle_key(key(KeyCode::Enter)), WalletAction::None);
    }
}
