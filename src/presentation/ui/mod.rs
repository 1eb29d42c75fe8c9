//! UI screens and the rendering dispatch table.

mod active_job_screen;
mod app;
mod auth_screen;
mod booking_screen;
mod bookings_screen;
mod categories_screen;
mod category_screen;
mod chat_screen;
mod customer_home;
mod language_screen;
mod not_found;
mod onboarding_screen;
mod profile_screen;
mod splash_screen;
mod tracking_screen;
mod wallet_screen;
mod worker_home;
mod worker_profile;

pub use active_job_screen::{ActiveJobAction, ActiveJobScreen, JobStage};
pub use app::App;
pub use auth_screen::{AuthAction, AuthScreen, AuthStep};
pub use booking_screen::{BookingAction, BookingScreen, BookingStep};
pub use bookings_screen::{BookingsAction, BookingsScreen};
pub use categories_screen::{CategoriesAction, CategoriesScreen};
pub use category_screen::{CategoryAction, CategoryScreen};
pub use chat_screen::{ChatAction, ChatScreen};
pub use customer_home::{CustomerHomeAction, CustomerHomeScreen};
pub use language_screen::{LanguageAction, LanguageScreen};
pub use not_found::NotFoundScreen;
pub use onboarding_screen::{OnboardingAction, OnboardingScreen, OnboardingStep};
pub use profile_screen::{ProfileAction, ProfileScreen};
pub use splash_screen::{SplashAction, SplashScreen};
pub use tracking_screen::{TrackingAction, TrackingScreen, TrackingStatus};
pub use wallet_screen::{WalletAction, WalletScreen};
pub use worker_home::{WorkerHomeAction, WorkerHomeScreen};
pub use worker_profile::{WorkerProfileAction, WorkerProfileScreen};

use crate::domain::ScreenId;

/// Which renderer draws a screen. Several screen identifiers may share
/// one renderer; `Wallet` and `Earnings` do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Language,
    Splash,
    Auth,
    Onboarding,
    CustomerHome,
    AllCategories,
    ServiceCategory,
    WorkerProfile,
    Booking,
    Tracking,
    Bookings,
    WorkerHome,
    ActiveJob,
    Wallet,
    Profile,
    Chat,
}

/// The rendering dispatch table. A screen identifier missing from this
/// table falls back to the placeholder view instead of panicking.
pub const DISPATCH: &[(ScreenId, ScreenKind)] = &[
    (ScreenId::LanguageSelection, ScreenKind::Language),
    (ScreenId::Splash, ScreenKind::Splash),
    (ScreenId::Auth, ScreenKind::Auth),
    (ScreenId::OnboardingWorker, ScreenKind::Onboarding),
    (ScreenId::CustomerHome, ScreenKind::CustomerHome),
    (ScreenId::AllCategories, ScreenKind::AllCategories),
    (ScreenId::ServiceCategory, ScreenKind::ServiceCategory),
    (ScreenId::WorkerProfile, ScreenKind::WorkerProfile),
    (ScreenId::BookingFlow, ScreenKind::Booking),
    (ScreenId::Tracking, ScreenKind::Tracking),
    (ScreenId::Bookings, ScreenKind::Bookings),
    (ScreenId::WorkerHome, ScreenKind::WorkerHome),
    (ScreenId::ActiveJob, ScreenKind::ActiveJob),
    (ScreenId::Earnings, ScreenKind::Wallet),
    (ScreenId::Wallet, ScreenKind::Wallet),
    (ScreenId::Profile, ScreenKind::Profile),
    (ScreenId::Chat, ScreenKind::Chat),
];

/// Resolves the renderer for a screen.
#[must_use]
pub fn screen_kind(screen: ScreenId) -> Option<ScreenKind> {
    DISPATCH
        .iter()
        .find(|(id, _)| *id == screen)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::ALL_SCREENS;

    #[test]
    fn test_dispatch_table_is_total() {
        for screen in ALL_SCREENS {
            assert!(
                screen_kind(*screen).is_some(),
                "no renderer mapped for {screen}"
            );
        }
    }

    #[test]
    fn test_wallet_and_earnings_share_a_renderer() {
        assert_eq!(screen_kind(ScreenId::Wallet), Some(ScreenKind::Wallet));
        assert_eq!(screen_kind(ScreenId::Earnings), Some(ScreenKind::Wallet));
    }

    #[test]
    fn test_each_screen_mapped_once() {
        for screen in ALL_SCREENS {
            let count = DISPATCH.iter().filter(|(id, _)| id == screen).count();
            assert_eq!(count, 1, "screen {screen} mapped {count} times");
        }
    }
}
