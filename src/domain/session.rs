//! Cross-screen session state.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CategoryId, Job, Worker};
use crate::domain::language::Language;
use crate::domain::screen::ScreenId;

/// Which side of the marketplace the user signed in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserMode {
    Customer,
    Worker,
}

impl std::fmt::Display for UserMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Worker => write!(f, "worker"),
        }
    }
}

/// The root state threaded through every screen.
///
/// Mutated exclusively by [`crate::domain::navigation::reduce`]; screens
/// read it and emit events. Selections are soft invariants: a screen
/// that needs one and finds `None` substitutes a default rather than
/// failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user_mode: Option<UserMode>,
    current_screen: ScreenId,
    selected_worker: Option<Worker>,
    selected_job: Option<Job>,
    selected_category: Option<CategoryId>,
    language: Language,
}

impl Session {
    /// A fresh session: language picker first, no role chosen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_mode: None,
            current_screen: ScreenId::LanguageSelection,
            selected_worker: None,
            selected_job: None,
            selected_category: None,
            language: Language::default(),
        }
    }

    #[must_use]
    pub const fn user_mode(&self) -> Option<UserMode> {
        self.user_mode
    }

    #[must_use]
    pub const fn current_screen(&self) -> ScreenId {
        self.current_screen
    }

    #[must_use]
    pub const fn selected_worker(&self) -> Option<&Worker> {
        self.selected_worker.as_ref()
    }

    #[must_use]
    pub const fn selected_job(&self) -> Option<&Job> {
        self.selected_job.as_ref()
    }

    #[must_use]
    pub const fn selected_category(&self) -> Option<&CategoryId> {
        self.selected_category.as_ref()
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    pub(crate) fn set_user_mode(&mut self, mode: Option<UserMode>) {
        self.user_mode = mode;
    }

    pub(crate) fn set_current_screen(&mut self, screen: ScreenId) {
        self.current_screen = screen;
    }

    pub(crate) fn set_selected_worker(&mut self, worker: Option<Worker>) {
        self.selected_worker = worker;
    }

    pub(crate) fn set_selected_job(&mut self, job: Option<Job>) {
        self.selected_job = job;
    }

    pub(crate) fn set_selected_category(&mut self, category: Option<CategoryId>) {
        self.selected_category = category;
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        assert_eq!(session.current_screen(), ScreenId::LanguageSelection);
        assert_eq!(session.user_mode(), None);
        assert_eq!(session.language(), Language::En);
        assert!(session.selected_worker().is_none());
        assert!(session.selected_job().is_none());
        assert!(session.selected_category().is_none());
    }
}
