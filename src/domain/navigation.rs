//! Navigation reducer and routing tables.
//!
//! All cross-screen movement runs through [`reduce`]: a pure function
//! from the current [`Session`] and one [`NavEvent`] to the next
//! session. Screens never set the current screen themselves; they emit
//! events. Back navigation is a fixed per-screen table, not a history
//! stack — arriving at a screen by an unusual path does not change
//! where its back button leads.

use tracing::debug;

use crate::domain::entities::{CategoryId, Job, Worker};
use crate::domain::language::Language;
use crate::domain::screen::ScreenId;
use crate::domain::session::{Session, UserMode};

/// A user-initiated navigation event.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Language picked on the first screen.
    LanguageChosen(Language),
    /// Role picked on the splash screen.
    ModeChosen(UserMode),
    /// Phone/OTP flow finished.
    AuthSucceeded,
    /// Worker onboarding wizard finished.
    OnboardingComplete,
    /// Plain screen switch with no payload.
    Navigate(ScreenId),
    /// Open the worker listing for one category.
    OpenCategory(CategoryId),
    /// Open a worker's profile.
    OpenWorker(Worker),
    /// Open the active-job screen for a specific job.
    OpenJob(Job),
    /// Booking wizard finished; hand off to tracking.
    BookingComplete,
    /// Per-screen back affordance.
    Back,
    /// Sign out from the profile screen.
    Logout,
}

/// Fixed back targets. Screens not listed here ignore `Back`.
const BACK_TARGETS: &[(ScreenId, ScreenId)] = &[
    (ScreenId::Auth, ScreenId::Splash),
    (ScreenId::AllCategories, ScreenId::CustomerHome),
    (ScreenId::ServiceCategory, ScreenId::AllCategories),
    (ScreenId::WorkerProfile, ScreenId::CustomerHome),
    (ScreenId::BookingFlow, ScreenId::WorkerProfile),
    (ScreenId::ActiveJob, ScreenId::WorkerHome),
    (ScreenId::Chat, ScreenId::CustomerHome),
];

/// Looks up the fixed back target for a screen.
#[must_use]
pub fn back_target(screen: ScreenId) -> Option<ScreenId> {
    BACK_TARGETS
        .iter()
        .find(|(from, _)| *from == screen)
        .map(|(_, to)| *to)
}

/// Applies one navigation event to a session.
///
/// Events whose guard does not hold leave the session unchanged; there
/// is no error path out of the reducer.
#[must_use]
pub fn reduce(mut session: Session, event: NavEvent) -> Session {
    let from = session.current_screen();

    match event {
        NavEvent::LanguageChosen(language) => {
            if from == ScreenId::LanguageSelection {
                session.set_language(language);
                session.set_current_screen(ScreenId::Splash);
            }
        }
        NavEvent::ModeChosen(mode) => {
            if from == ScreenId::Splash {
                session.set_user_mode(Some(mode));
                session.set_current_screen(ScreenId::Auth);
            }
        }
        NavEvent::AuthSucceeded => {
            if from == ScreenId::Auth {
                match session.user_mode() {
                    Some(UserMode::Customer) => {
                        session.set_current_screen(ScreenId::CustomerHome);
                    }
                    Some(UserMode::Worker) => {
                        session.set_current_screen(ScreenId::OnboardingWorker);
                    }
                    // Unreachable through the UI; stay put rather than
                    // guessing a role.
                    None => {}
                }
            }
        }
        NavEvent::OnboardingComplete => {
            if from == ScreenId::OnboardingWorker {
                session.set_current_screen(ScreenId::WorkerHome);
            }
        }
        NavEvent::Navigate(target) => {
            let allowed = match target {
                ScreenId::AllCategories => session.user_mode() == Some(UserMode::Customer),
                ScreenId::BookingFlow => session.selected_worker().is_some(),
                _ => true,
            };
            if allowed {
                session.set_current_screen(target);
            }
        }
        NavEvent::OpenCategory(category) => {
            session.set_selected_category(Some(category));
            session.set_current_screen(ScreenId::ServiceCategory);
        }
        NavEvent::OpenWorker(worker) => {
            session.set_selected_worker(Some(worker));
            session.set_current_screen(ScreenId::WorkerProfile);
        }
        NavEvent::OpenJob(job) => {
            session.set_selected_job(Some(job));
            session.set_current_screen(ScreenId::ActiveJob);
        }
        NavEvent::BookingComplete => {
            if from == ScreenId::BookingFlow {
                session.set_current_screen(ScreenId::Tracking);
            }
        }
        NavEvent::Back => {
            if let Some(target) = back_target(from) {
                session.set_current_screen(target);
            }
        }
        NavEvent::Logout => {
            if from == ScreenId::Profile {
                // Language survives logout; everything else resets.
                session.set_user_mode(None);
                session.set_selected_worker(None);
                session.set_selected_job(None);
                session.set_selected_category(None);
                session.set_current_screen(ScreenId::LanguageSelection);
            }
        }
    }

    if session.current_screen() != from {
        debug!(from = %from, to = %session.current_screen(), "Screen transition");
    }

    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn customer_at(screen: ScreenId) -> Session {
        let session = reduce(Session::new(), NavEvent::LanguageChosen(Language::Hi));
        let session = reduce(session, NavEvent::ModeChosen(UserMode::Customer));
        let mut session = reduce(session, NavEvent::AuthSucceeded);
        session.set_current_screen(screen);
        session
    }

    fn worker_at(screen: ScreenId) -> Session {
        let session = reduce(Session::new(), NavEvent::LanguageChosen(Language::Hi));
        let session = reduce(session, NavEvent::ModeChosen(UserMode::Worker));
        let session = reduce(session, NavEvent::AuthSucceeded);
        let mut session = reduce(session, NavEvent::OnboardingComplete);
        session.set_current_screen(screen);
        session
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.current_screen(), ScreenId::LanguageSelection);
        assert_eq!(session.user_mode(), None);
    }

    #[test]
    fn test_language_selection_advances_to_splash() {
        let session = reduce(Session::new(), NavEvent::LanguageChosen(Language::Ta));
        assert_eq!(session.current_screen(), ScreenId::Splash);
        assert_eq!(session.language(), Language::Ta);
    }

    #[test]
    fn test_language_is_sticky() {
        let mut session = reduce(Session::new(), NavEvent::LanguageChosen(Language::Bn));
        let events = [
            NavEvent::ModeChosen(UserMode::Customer),
            NavEvent::AuthSucceeded,
            NavEvent::Navigate(ScreenId::AllCategories),
            NavEvent::OpenCategory(CategoryId::new("mason")),
            NavEvent::Back,
            NavEvent::Navigate(ScreenId::Profile),
            NavEvent::Logout,
        ];
        for event in events {
            session = reduce(session, event);
            assert_eq!(session.language(), Language::Bn);
        }
    }

    #[test]
    fn test_mode_routes_auth_success() {
        let customer = reduce(Session::new(), NavEvent::LanguageChosen(Language::En));
        let customer = reduce(customer, NavEvent::ModeChosen(UserMode::Customer));
        let customer = reduce(customer, NavEvent::AuthSucceeded);
        assert_eq!(customer.current_screen(), ScreenId::CustomerHome);

        let worker = reduce(Session::new(), NavEvent::LanguageChosen(Language::En));
        let worker = reduce(worker, NavEvent::ModeChosen(UserMode::Worker));
        let worker = reduce(worker, NavEvent::AuthSucceeded);
        assert_eq!(worker.current_screen(), ScreenId::OnboardingWorker);
    }

    #[test]
    fn test_auth_success_without_mode_stays_put() {
        let mut session = Session::new();
        session.set_current_screen(ScreenId::Auth);
        let session = reduce(session, NavEvent::AuthSucceeded);
        assert_eq!(session.current_screen(), ScreenId::Auth);
    }

    #[test]
    fn test_open_worker_records_selection() {
        let worker = Worker::new("w1", "Rajesh Kumar", "mason", 4.8, 350);
        let session = customer_at(ScreenId::ServiceCategory);
        let session = reduce(session, NavEvent::OpenWorker(worker.clone()));

        assert_eq!(session.current_screen(), ScreenId::WorkerProfile);
        assert_eq!(session.selected_worker(), Some(&worker));
    }

    #[test]
    fn test_booking_flow_requires_selected_worker() {
        let session = customer_at(ScreenId::CustomerHome);
        let session = reduce(session, NavEvent::Navigate(ScreenId::BookingFlow));
        assert_eq!(session.current_screen(), ScreenId::CustomerHome);

        let worker = Worker::new("w1", "Rajesh Kumar", "mason", 4.8, 350);
        let session = reduce(
            customer_at(ScreenId::CustomerHome),
            NavEvent::OpenWorker(worker),
        );
        let session = reduce(session, NavEvent::Navigate(ScreenId::BookingFlow));
        assert_eq!(session.current_screen(), ScreenId::BookingFlow);
    }

    #[test]
    fn test_all_categories_is_customer_only() {
        let session = worker_at(ScreenId::WorkerHome);
        let session = reduce(session, NavEvent::Navigate(ScreenId::AllCategories));
        assert_eq!(session.current_screen(), ScreenId::WorkerHome);
    }

    #[test]
    fn test_active_job_without_selection_keeps_none() {
        let session = worker_at(ScreenId::WorkerHome);
        let session = reduce(session, NavEvent::Navigate(ScreenId::ActiveJob));
        assert_eq!(session.current_screen(), ScreenId::ActiveJob);
        // The screen layer substitutes Job::placeholder() here.
        assert!(session.selected_job().is_none());
    }

    #[test]
    fn test_open_job_records_selection() {
        let job = Job::placeholder();
        let session = worker_at(ScreenId::WorkerHome);
        let session = reduce(session, NavEvent::OpenJob(job.clone()));
        assert_eq!(session.current_screen(), ScreenId::ActiveJob);
        assert_eq!(session.selected_job(), Some(&job));
    }

    #[test]
    fn test_booking_complete_only_from_booking_flow() {
        let worker = Worker::new("w1", "Rajesh Kumar", "mason", 4.8, 350);
        let session = reduce(
            customer_at(ScreenId::CustomerHome),
            NavEvent::OpenWorker(worker),
        );
        let session = reduce(session, NavEvent::Navigate(ScreenId::BookingFlow));
        let session = reduce(session, NavEvent::BookingComplete);
        assert_eq!(session.current_screen(), ScreenId::Tracking);

        let elsewhere = customer_at(ScreenId::CustomerHome);
        let elsewhere = reduce(elsewhere, NavEvent::BookingComplete);
        assert_eq!(elsewhere.current_screen(), ScreenId::CustomerHome);
    }

    #[test]
    fn test_logout_resets_mode_keeps_language() {
        let session = reduce(Session::new(), NavEvent::LanguageChosen(Language::Gu));
        let session = reduce(session, NavEvent::ModeChosen(UserMode::Customer));
        let session = reduce(session, NavEvent::AuthSucceeded);
        let session = reduce(session, NavEvent::Navigate(ScreenId::Profile));
        let session = reduce(session, NavEvent::Logout);

        assert_eq!(session.current_screen(), ScreenId::LanguageSelection);
        assert_eq!(session.user_mode(), None);
        assert_eq!(session.language(), Language::Gu);
        assert!(session.selected_worker().is_none());
        assert!(session.selected_job().is_none());
    }

    #[test]
    fn test_logout_only_from_profile() {
        let session = customer_at(ScreenId::CustomerHome);
        let session = reduce(session, NavEvent::Logout);
        assert_eq!(session.current_screen(), ScreenId::CustomerHome);
    }

    #[test_case(ScreenId::Auth, ScreenId::Splash; "auth returns to splash")]
    #[test_case(ScreenId::AllCategories, ScreenId::CustomerHome; "categories return home")]
    #[test_case(ScreenId::ServiceCategory, ScreenId::AllCategories; "category listing returns to categories")]
    #[test_case(ScreenId::WorkerProfile, ScreenId::CustomerHome; "profile returns home")]
    #[test_case(ScreenId::BookingFlow, ScreenId::WorkerProfile; "booking returns to worker profile")]
    #[test_case(ScreenId::ActiveJob, ScreenId::WorkerHome; "active job returns to worker home")]
    #[test_case(ScreenId::Chat, ScreenId::CustomerHome; "chat returns home")]
    fn test_back_targets(from: ScreenId, to: ScreenId) {
        assert_eq!(back_target(from), Some(to));

        let mut session = customer_at(from);
        session = reduce(session, NavEvent::Back);
        assert_eq!(session.current_screen(), to);
    }

    #[test]
    fn test_back_target_ignores_history() {
        // Arrive at ServiceCategory straight from home; back still goes
        // to AllCategories, never to where we actually came from.
        let session = customer_at(ScreenId::CustomerHome);
        let session = reduce(session, NavEvent::OpenCategory(CategoryId::new("welder")));
        assert_eq!(session.current_screen(), ScreenId::ServiceCategory);

        let session = reduce(session, NavEvent::Back);
        assert_eq!(session.current_screen(), ScreenId::AllCategories);
    }

    #[test]
    fn test_back_without_target_is_noop() {
        let session = customer_at(ScreenId::Wallet);
        let session = reduce(session, NavEvent::Back);
        assert_eq!(session.current_screen(), ScreenId::Wallet);
    }

    #[test]
    fn test_wallet_and_earnings_are_distinct_states() {
        let wallet = reduce(
            customer_at(ScreenId::CustomerHome),
            NavEvent::Navigate(ScreenId::Wallet),
        );
        let earnings = reduce(
            worker_at(ScreenId::WorkerHome),
            NavEvent::Navigate(ScreenId::Earnings),
        );
        assert_eq!(wallet.current_screen(), ScreenId::Wallet);
        assert_eq!(earnings.current_screen(), ScreenId::Earnings);
    }

    #[test]
    fn test_language_chosen_ignored_after_start() {
        let session = customer_at(ScreenId::CustomerHome);
        let before = session.language();
        let session = reduce(session, NavEvent::LanguageChosen(Language::Ml));
        assert_eq!(session.current_screen(), ScreenId::CustomerHome);
        assert_eq!(session.language(), before);
    }
}
