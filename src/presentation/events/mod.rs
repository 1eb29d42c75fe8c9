//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of event handling at the application level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Terminal event helpers.
pub struct EventHandler;

impl EventHandler {
    /// Checks if key should quit the application from anywhere.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is the back affordance.
    #[must_use]
    pub fn is_back_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }

    /// Maps a bare number key to a nav-bar slot.
    #[must_use]
    pub fn nav_slot(key: &KeyEvent) -> Option<usize> {
        if key.modifiers != KeyModifiers::NONE {
            return None;
        }
        match key.code {
            KeyCode::Char(c @ '1'..='4') => Some(c as usize - '1' as usize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    #[test]
    fn test_quit_events() {
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        )));
        assert!(!EventHandler::is_quit_event(&make_key_event(
            KeyCode::Char('q'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_back_event() {
        assert!(EventHandler::is_back_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
        assert!(!EventHandler::is_back_event(&make_key_event(
            KeyCode::Esc,
            KeyModifiers::SHIFT
        )));
    }

    #[test]
    fn test_nav_slots() {
        assert_eq!(
            EventHandler::nav_slot(&make_key_event(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(0)
        );
        assert_eq!(
            EventHandler::nav_slot(&make_key_event(KeyCode::Char('4'), KeyModifiers::NONE)),
            Some(3)
        );
        assert_eq!(
            EventHandler::nav_slot(&make_key_event(KeyCode::Char('5'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            EventHandler::nav_slot(&make_key_event(KeyCode::Char('1'), KeyModifiers::ALT)),
            None
        );
    }
}
