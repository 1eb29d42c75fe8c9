//! Chat screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::presentation::widgets::TextInput;

/// One chat bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChatMessage {
    from_me: bool,
    text: String,
}

/// What the chat screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAction {
    /// Key consumed, nothing to do.
    None,
    /// Key not handled here.
    Ignored,
    /// Leave the screen.
    BackRequested,
}

/// Mock conversation with the booked worker; sent messages only append
/// locally.
pub struct ChatScreen {
    translator: Translator,
    peer_name: String,
    messages: Vec<ChatMessage>,
    input: TextInput,
}

impl ChatScreen {
    #[must_use]
    pub fn new(translator: Translator, peer_name: impl Into<String>) -> Self {
        let mut input = TextInput::new("Message");
        input.set_focused(true);

        Self {
            translator,
            peer_name: peer_name.into(),
            messages: vec![
                ChatMessage {
                    from_me: false,
                    text: "Namaste! I am on my way.".to_string(),
                },
                ChatMessage {
                    from_me: true,
                    text: "Great, the gate is open.".to_string(),
                },
                ChatMessage {
                    from_me: false,
                    text: "Reaching in 15 minutes.".to_string(),
                },
            ],
            input,
        }
    }

    /// Number of messages in the thread.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ChatAction {
        match key.code {
            KeyCode::Enter => {
                let text = self.input.value().trim().to_string();
                if !text.is_empty() {
                    self.messages.push(ChatMessage {
                        from_me: true,
                        text,
                    });
                    self.input.clear();
                }
                ChatAction::None
            }
            KeyCode::Esc => ChatAction::BackRequested,
            KeyCode::Char(c) => {
                self.input.input_char(c);
                ChatAction::None
            }
            KeyCode::Backspace => {
                self.input.backspace();
                ChatAction::None
            }
            _ => ChatAction::Ignored,
        }
    }
}

impl Widget for &ChatScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(
                " {} — {} ",
                self.translator.t("chat"),
                self.peer_name
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ]);
        let [thread_area, input_area, hint_area] = vertical.areas(inner);

        let visible = usize::from(thread_area.height);
        let start = self.messages.len().saturating_sub(visible);
        let lines: Vec<Line<'_>> = self.messages[start..]
            .iter()
            .map(|message| {
                if message.from_me {
                    Line::from(Span::styled(
                        format!("{} ◄", message.text),
                        Style::default().fg(Color::Yellow),
                    ))
                    .right_aligned()
                } else {
                    Line::from(vec![
                        Span::styled("► ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            message.text.as_str(),
                            Style::default().fg(Color::White),
                        ),
                    ])
                }
            })
            .collect();
        Paragraph::new(lines).render(thread_area, buf);

        (&self.input).render(input_area, buf);

        Paragraph::new("Enter: send | Esc: back")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            )
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

    #[test]
    fn test_send_appends_locally() {
        let mut chat = ChatScreen::new(Translator::default(), "Rajesh Kumar");
        let before = chat.message_count();

        for c in "ok".chars() {
            chat.handle_key(key(KeyCode::Char(c)));
        }
        chat.handle_key(key(KeyCode::Enter));

        assert_eq!(chat.message_count(), before + 1);
    }

    #[test]
    fn test_blank_message_not_sent() {
        let mut chat = ChatScreen::new(Translator::default(), "Rajesh Kumar");
        let before = chat.message_count();
        chat.handle_key(key(KeyCode::Enter));
        assert_eq!(chat.message_count(), before);
    }

    #[test]
    fn test_esc_requests_back() {
        let mut chat = ChatScreen::new(Translator::default(), "Rajesh Kumar");
        assert_eq!(chat.handle_key(key(KeyCode::Esc)), ChatAction::BackRequested);
    }
}
