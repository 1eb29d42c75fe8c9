//! Persistent bottom navigation bar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::Translator;
use crate::domain::{ScreenId, UserMode};

/// One tappable item on the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Translation key for the label.
    pub label_key: &'static str,
    /// Where the item navigates.
    pub target: ScreenId,
}

const CUSTOMER_ITEMS: [NavItem; 4] = [
    NavItem {
        label_key: "nav_home",
        target: ScreenId::CustomerHome,
    },
    NavItem {
        label_key: "nav_track",
        target: ScreenId::Tracking,
    },
    NavItem {
        label_key: "nav_wallet",
        target: ScreenId::Wallet,
    },
    NavItem {
        label_key: "nav_profile",
        target: ScreenId::Profile,
    },
];

const WORKER_ITEMS: [NavItem; 4] = [
    NavItem {
        label_key: "nav_jobs",
        target: ScreenId::WorkerHome,
    },
    NavItem {
        label_key: "nav_active",
        target: ScreenId::ActiveJob,
    },
    NavItem {
        label_key: "nav_earnings",
        target: ScreenId::Earnings,
    },
    NavItem {
        label_key: "nav_profile",
        target: ScreenId::Profile,
    },
];

/// The role-dependent item set. The wallet slot is the one visible
/// difference between the roles' shared money screen.
#[must_use]
pub const fn items_for(mode: UserMode) -> &'static [NavItem; 4] {
    match mode {
        UserMode::Customer => &CUSTOMER_ITEMS,
        UserMode::Worker => &WORKER_ITEMS,
    }
}

/// Bottom navigation bar widget.
pub struct NavBar {
    items: &'static [NavItem; 4],
    active: ScreenId,
    translator: Translator,
}

impl NavBar {
    #[must_use]
    pub const fn new(mode: UserMode, active: ScreenId, translator: Translator) -> Self {
        Self {
            items: items_for(mode),
            active,
            translator,
        }
    }
}

impl Widget for &NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_char(' ').set_style(Style::default());
            }
        }

        let slots = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for (i, (item, slot)) in self.items.iter().zip(slots.iter()).enumerate() {
            let is_active = item.target == self.active;
            let style = if is_active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let label = self.translator.t(item.label_key);
            let line = Line::from(vec![
                Span::styled(format!("{} ", i + 1), style.add_modifier(Modifier::DIM)),
                Span::styled(label, style),
            ]);
            Paragraph::new(line).centered().render(*slot, buf);
        }
    }
}
