//! Fallback placeholder view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;

/// Rendered when the dispatch table has no renderer for the current
/// screen. Deliberately inert: no keys, no state, no panic.
pub struct NotFoundScreen {
    translator: Translator,
}

impl NotFoundScreen {
    #[must_use]
    pub const fn new(translator: Translator) -> Self {
        Self { translator }
    }
}

impl Widget for &NotFoundScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.translator.t("not_found"))
            .style(Style::default().fg(Color::DarkGray))
            .centered()
            .render(area, buf);
    }
}
