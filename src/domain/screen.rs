//! Screen identifiers for the view router.

use serde::{Deserialize, Serialize};

/// Identifies one screen of the application.
///
/// `Wallet` and `Earnings` are deliberately distinct identifiers even
/// though they resolve to the same rendered view: the bottom bar labels
/// them differently per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    LanguageSelection,
    Splash,
    Auth,
    OnboardingWorker,

    // Customer screens
    CustomerHome,
    AllCategories,
    ServiceCategory,
    WorkerProfile,
    BookingFlow,
    Tracking,
    Bookings,

    // Worker screens
    WorkerHome,
    ActiveJob,
    Earnings,

    // Shared screens
    Wallet,
    Profile,
    Chat,
}

impl ScreenId {
    /// Whether the persistent bottom navigation bar is visible on this
    /// screen. Pre-login screens and the onboarding wizard suppress it.
    #[must_use]
    pub const fn shows_nav_bar(self) -> bool {
        !matches!(
            self,
            Self::LanguageSelection | Self::Splash | Self::Auth | Self::OnboardingWorker
        )
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LanguageSelection => "language-selection",
            Self::Splash => "splash",
            Self::Auth => "auth",
            Self::OnboardingWorker => "onboarding-worker",
            Self::CustomerHome => "customer-home",
            Self::AllCategories => "all-categories",
            Self::ServiceCategory => "service-category",
            Self::WorkerProfile => "worker-profile",
            Self::BookingFlow => "booking-flow",
            Self::Tracking => "tracking",
            Self::Bookings => "bookings",
            Self::WorkerHome => "worker-home",
            Self::ActiveJob => "active-job",
            Self::Earnings => "earnings",
            Self::Wallet => "wallet",
            Self::Profile => "profile",
            Self::Chat => "chat",
        };
        write!(f, "{name}")
    }
}

/// All screen identifiers, in declaration order. Used by the renderer
/// dispatch tests to prove the dispatch table is total.
pub const ALL_SCREENS: &[ScreenId] = &[
    ScreenId::LanguageSelection,
    ScreenId::Splash,
    ScreenId::Auth,
    ScreenId::OnboardingWorker,
    ScreenId::CustomerHome,
    ScreenId::AllCategories,
    ScreenId::ServiceCategory,
    ScreenId::WorkerProfile,
    ScreenId::BookingFlow,
    ScreenId::Tracking,
    ScreenId::Bookings,
    ScreenId::WorkerHome,
    ScreenId::ActiveJob,
    ScreenId::Earnings,
    ScreenId::Wallet,
    ScreenId::Profile,
    ScreenId::Chat,
];
