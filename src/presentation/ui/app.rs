//! Main application orchestrator.
//!
//! Owns the [`Session`], feeds every user event through the navigation
//! reducer, and keeps exactly one active screen state in sync with the
//! dispatch table. Simulated network operations run as spawned tasks
//! that report back on the action channel, the only path by which
//! asynchronous results re-enter the event loop.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::application::dto::EnrollmentForm;
use crate::application::services::{Translator, WorkerSearch};
use crate::application::use_cases::{
    BookWorkerUseCase, EnrollWorkerUseCase, EnrollmentOutcome, OtpLoginUseCase, WalletUseCase,
};
use crate::domain::entities::{Category, CategoryId, Job, PhoneNumber, Worker};
use crate::domain::errors::{AuthError, DataError};
use crate::domain::ports::{
    EnrollmentPort, MarketDataPort, MediaKind, MediaPickerPort, MediaRef, OtpGatewayPort,
    WalletSnapshot,
};
use crate::domain::{NavEvent, ScreenId, Session, reduce};
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{
    ActiveJobAction, ActiveJobScreen, AuthAction, AuthScreen, BookingAction, BookingScreen,
    BookingStep, BookingsAction, BookingsScreen, CategoriesAction, CategoriesScreen, CategoryAction,
    CategoryScreen, ChatAction, ChatScreen, CustomerHomeAction, CustomerHomeScreen,
    LanguageAction, LanguageScreen, NotFoundScreen, OnboardingAction, OnboardingScreen,
    ProfileAction, ProfileScreen, ScreenKind, SplashAction, SplashScreen, TrackingAction,
    TrackingScreen, WalletAction, WalletScreen, WorkerHomeAction, WorkerHomeScreen,
    WorkerProfileAction, WorkerProfileScreen, screen_kind,
};
use crate::presentation::widgets::{NavBar, items_for};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(100);

/// Category listed when none was selected, matching the first seed
/// category.
const DEFAULT_CATEGORY: &str = "mason";

/// Results of simulated operations, delivered on the action channel.
#[derive(Debug)]
enum Action {
    CodeSent(Result<PhoneNumber, AuthError>),
    CodeVerified(Result<(), AuthError>),
    BookingStepDone,
    MediaPicked(MediaKind, Result<MediaRef, DataError>),
    EnrollmentFinished(Result<EnrollmentOutcome, DataError>),
    WalletUpdated(Result<WalletSnapshot, DataError>),
}

/// Reference data loaded once at startup.
#[derive(Debug, Default, Clone)]
struct MarketSnapshot {
    workers: Vec<Worker>,
    categories: Vec<Category>,
    jobs: Vec<Job>,
}

/// The one live screen; rebuilt whenever the reducer lands somewhere
/// else.
enum ActiveScreen {
    Language(LanguageScreen),
    Splash(SplashScreen),
    Auth(AuthScreen),
    Onboarding(OnboardingScreen),
    CustomerHome(CustomerHomeScreen),
    AllCategories(CategoriesScreen),
    ServiceCategory(CategoryScreen),
    WorkerProfile(WorkerProfileScreen),
    Booking(Box<BookingScreen>),
    Tracking(TrackingScreen),
    Bookings(BookingsScreen),
    WorkerHome(WorkerHomeScreen),
    ActiveJob(ActiveJobScreen),
    Wallet(WalletScreen),
    Profile(ProfileScreen),
    Chat(ChatScreen),
    NotFound(NotFoundScreen),
}

pub struct App {
    config: AppConfig,
    session: Session,
    translator: Translator,
    screen: ActiveScreen,
    market: MarketSnapshot,
    wallet: WalletSnapshot,
    search: WorkerSearch,
    otp_login: OtpLoginUseCase,
    book_worker: BookWorkerUseCase,
    enroll_worker: EnrollWorkerUseCase,
    wallet_use_case: WalletUseCase,
    data_port: Arc<dyn MarketDataPort>,
    media_picker: Arc<dyn MediaPickerPort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(
        config: AppConfig,
        data_port: Arc<dyn MarketDataPort>,
        otp_gateway: Arc<dyn OtpGatewayPort>,
        enrollment: Arc<dyn EnrollmentPort>,
        media_picker: Arc<dyn MediaPickerPort>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let session = Session::new();
        let translator = Translator::new(session.language());

        let mut app = Self {
            otp_login: OtpLoginUseCase::new(otp_gateway),
            book_worker: BookWorkerUseCase::new(),
            enroll_worker: EnrollWorkerUseCase::new(enrollment),
            wallet_use_case: WalletUseCase::new(data_port.clone()),
            config,
            session,
            translator,
            screen: ActiveScreen::Language(LanguageScreen::new(None)),
            market: MarketSnapshot::default(),
            wallet: WalletSnapshot {
                balance: 0,
                transactions: Vec::new(),
            },
            search: WorkerSearch::new(),
            data_port,
            media_picker,
            action_tx,
            action_rx,
            exiting: false,
        };
        app.rebuild_screen();
        app
    }

    /// Current session, read-only; what the view layer renders from.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// # Errors
    /// Returns error if terminal drawing fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.load_market_data().await;
        self.rebuild_screen();

        info!("Entering event loop");
        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn load_market_data(&mut self) {
        match self.data_port.workers().await {
            Ok(workers) => self.market.workers = workers,
            Err(e) => error!(error = %e, "Failed to load workers"),
        }
        match self.data_port.categories().await {
            Ok(categories) => self.market.categories = categories,
            Err(e) => error!(error = %e, "Failed to load categories"),
        }
        match self.data_port.jobs().await {
            Ok(jobs) => self.market.jobs = jobs,
            Err(e) => error!(error = %e, "Failed to load jobs"),
        }
        match self.data_port.wallet().await {
            Ok(wallet) => self.wallet = wallet,
            Err(e) => error!(error = %e, "Failed to load wallet"),
        }

        info!(
            workers = self.market.workers.len(),
            categories = self.market.categories.len(),
            jobs = self.market.jobs.len(),
            "Market data loaded"
        );
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if self.tick(ANIMATION_TICK_RATE) {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.exiting = true;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    /// Advances time-driven screens. Returns whether a redraw is due.
    fn tick(&mut self, duration: Duration) -> bool {
        match &mut self.screen {
            ActiveScreen::Splash(splash) => {
                splash.tick(duration);
                true
            }
            ActiveScreen::Tracking(tracking) => {
                tracking.tick(duration);
                true
            }
            _ => false,
        }
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(*key),
            _ => EventResult::Continue,
        }
    }

    /// Applies one navigation event through the reducer and re-syncs
    /// the active screen if the session actually changed.
    fn dispatch(&mut self, event: NavEvent) {
        let before = self.session.clone();
        self.session = reduce(before.clone(), event);

        if self.session == before {
            return;
        }

        self.translator = Translator::new(self.session.language());
        self.rebuild_screen();
    }

    fn default_job(&self) -> Job {
        self.market
            .jobs
            .first()
            .cloned()
            .unwrap_or_else(Job::placeholder)
    }

    fn fallback_worker(&self) -> Worker {
        self.market.workers.first().cloned().unwrap_or_else(|| {
            Worker::new("w0", "Rajesh Kumar", DEFAULT_CATEGORY, 4.8, 350)
                .with_jobs_completed(142)
                .with_experience_years(8)
                .with_verified(true)
        })
    }

    /// Builds the screen state the dispatch table names for the
    /// current session. A table miss lands on the placeholder view.
    fn rebuild_screen(&mut self) {
        let t = self.translator;
        let kind = screen_kind(self.session.current_screen());

        self.screen = match kind {
            Some(ScreenKind::Language) => {
                ActiveScreen::Language(LanguageScreen::new(self.config.language))
            }
            Some(ScreenKind::Splash) => ActiveScreen::Splash(SplashScreen::new(
                t,
                self.config.ui.enable_animations,
            )),
            Some(ScreenKind::Auth) => {
                ActiveScreen::Auth(AuthScreen::new(t, self.session.user_mode()))
            }
            Some(ScreenKind::Onboarding) => ActiveScreen::Onboarding(OnboardingScreen::new(t)),
            Some(ScreenKind::CustomerHome) => ActiveScreen::CustomerHome(CustomerHomeScreen::new(
                t,
                self.market.workers.clone(),
                self.market.categories.clone(),
                self.search.clone(),
            )),
            Some(ScreenKind::AllCategories) => ActiveScreen::AllCategories(
                CategoriesScreen::new(t, self.market.categories.clone()),
            ),
            Some(ScreenKind::ServiceCategory) => {
                let category = self
                    .session
                    .selected_category()
                    .cloned()
                    .unwrap_or_else(|| CategoryId::new(DEFAULT_CATEGORY));
                ActiveScreen::ServiceCategory(CategoryScreen::new(
                    t,
                    category,
                    self.market.workers.clone(),
                ))
            }
            Some(ScreenKind::WorkerProfile) => {
                let worker = self
                    .session
                    .selected_worker()
                    .cloned()
                    .unwrap_or_else(|| self.fallback_worker());
                ActiveScreen::WorkerProfile(WorkerProfileScreen::new(t, worker))
            }
            Some(ScreenKind::Booking) => {
                let worker = self
                    .session
                    .selected_worker()
                    .cloned()
                    .unwrap_or_else(|| self.fallback_worker());
                let quote = self.book_worker.quote(&worker);
                ActiveScreen::Booking(Box::new(BookingScreen::new(t, worker, quote)))
            }
            Some(ScreenKind::Tracking) => ActiveScreen::Tracking(TrackingScreen::new(
                t,
                self.session
                    .selected_worker()
                    .cloned()
                    .or_else(|| self.market.workers.first().cloned()),
                Duration::from_secs(self.config.simulation.travel_secs),
                self.config.simulation.start_code.clone(),
            )),
            Some(ScreenKind::Bookings) => {
                ActiveScreen::Bookings(BookingsScreen::new(t, self.market.jobs.clone()))
            }
            Some(ScreenKind::WorkerHome) => {
                ActiveScreen::WorkerHome(WorkerHomeScreen::new(t, self.market.jobs.clone()))
            }
            Some(ScreenKind::ActiveJob) => {
                // An unset selection silently substitutes the default
                // job; the screen never errors.
                let job = self
                    .session
                    .selected_job()
                    .cloned()
                    .unwrap_or_else(|| self.default_job());
                ActiveScreen::ActiveJob(ActiveJobScreen::new(
                    t,
                    job,
                    self.config.simulation.start_code.clone(),
                ))
            }
            Some(ScreenKind::Wallet) => {
                ActiveScreen::Wallet(WalletScreen::new(t, self.wallet.clone()))
            }
            Some(ScreenKind::Profile) => {
                ActiveScreen::Profile(ProfileScreen::new(t, self.session.language()))
            }
            Some(ScreenKind::Chat) => {
                let peer = self
                    .session
                    .selected_worker()
                    .map(|worker| worker.name().to_string())
                    .unwrap_or_else(|| self.fallback_worker().name().to_string());
                ActiveScreen::Chat(ChatScreen::new(t, peer))
            }
            None => {
                warn!(screen = %self.session.current_screen(), "No renderer mapped; showing placeholder");
                ActiveScreen::NotFound(NotFoundScreen::new(t))
            }
        };
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let nav_visible =
            self.session.current_screen().shows_nav_bar() && self.session.user_mode().is_some();

        let body = if nav_visible {
            let [body, bar] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
            if let Some(mode) = self.session.user_mode() {
                let nav = NavBar::new(mode, self.session.current_screen(), self.translator);
                frame.render_widget(&nav, bar);
            }
            body
        } else {
            area
        };

        match &mut self.screen {
            ActiveScreen::Language(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Splash(screen) => frame.render_widget(screen, body),
            ActiveScreen::Auth(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Onboarding(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::CustomerHome(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::AllCategories(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::ServiceCategory(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::WorkerProfile(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Booking(screen) => frame.render_widget(&**screen, body),
            ActiveScreen::Tracking(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Bookings(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::WorkerHome(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::ActiveJob(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Wallet(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Profile(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::Chat(screen) => frame.render_widget(&*screen, body),
            ActiveScreen::NotFound(screen) => frame.render_widget(&*screen, body),
        }
    }

    #[allow(clippy::too_many_lines)]
    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        // The active screen gets the key first; only unconsumed keys
        // fall through to global navigation.
        let consumed = match &mut self.screen {
            ActiveScreen::Language(screen) => match screen.handle_key(key) {
                LanguageAction::Chosen(language) => {
                    self.dispatch(NavEvent::LanguageChosen(language));
                    true
                }
                LanguageAction::None => true,
                LanguageAction::Ignored => false,
            },
            ActiveScreen::Splash(screen) => match screen.handle_key(key) {
                SplashAction::ModeChosen(mode) => {
                    self.dispatch(NavEvent::ModeChosen(mode));
                    true
                }
                SplashAction::None => true,
                SplashAction::Ignored => false,
            },
            ActiveScreen::Auth(screen) => match screen.handle_key(key) {
                AuthAction::RequestCode(phone) => {
                    self.spawn_request_code(phone);
                    true
                }
                AuthAction::VerifyCode(code) => {
                    self.spawn_verify_code(code);
                    true
                }
                AuthAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                AuthAction::None => true,
                AuthAction::Ignored => false,
            },
            ActiveScreen::Onboarding(screen) => match screen.handle_key(key) {
                OnboardingAction::PickMedia(kind) => {
                    self.spawn_pick_media(kind);
                    true
                }
                OnboardingAction::Submit => {
                    let form = screen.form();
                    self.spawn_enrollment(form);
                    true
                }
                OnboardingAction::Finished => {
                    self.dispatch(NavEvent::OnboardingComplete);
                    true
                }
                OnboardingAction::None => true,
                OnboardingAction::Ignored => false,
            },
            ActiveScreen::CustomerHome(screen) => match screen.handle_key(key) {
                CustomerHomeAction::OpenWorker(worker) => {
                    self.dispatch(NavEvent::OpenWorker(worker));
                    true
                }
                CustomerHomeAction::BrowseCategories => {
                    self.dispatch(NavEvent::Navigate(ScreenId::AllCategories));
                    true
                }
                CustomerHomeAction::None => true,
                CustomerHomeAction::Ignored => false,
            },
            ActiveScreen::AllCategories(screen) => match screen.handle_key(key) {
                CategoriesAction::OpenCategory(category) => {
                    self.dispatch(NavEvent::OpenCategory(category));
                    true
                }
                CategoriesAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                CategoriesAction::None => true,
                CategoriesAction::Ignored => false,
            },
            ActiveScreen::ServiceCategory(screen) => match screen.handle_key(key) {
                CategoryAction::OpenWorker(worker) => {
                    self.dispatch(NavEvent::OpenWorker(worker));
                    true
                }
                CategoryAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                CategoryAction::None => true,
                CategoryAction::Ignored => false,
            },
            ActiveScreen::WorkerProfile(screen) => match screen.handle_key(key) {
                WorkerProfileAction::Book => {
                    self.dispatch(NavEvent::Navigate(ScreenId::BookingFlow));
                    true
                }
                WorkerProfileAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                WorkerProfileAction::None => true,
                WorkerProfileAction::Ignored => false,
            },
            ActiveScreen::Booking(screen) => match screen.handle_key(key) {
                BookingAction::Advance => {
                    self.spawn_booking_step();
                    true
                }
                BookingAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                BookingAction::TrackRequested => {
                    self.dispatch(NavEvent::BookingComplete);
                    true
                }
                BookingAction::None => true,
                BookingAction::Ignored => false,
            },
            ActiveScreen::Tracking(screen) => match screen.handle_key(key) {
                TrackingAction::OpenChat => {
                    self.dispatch(NavEvent::Navigate(ScreenId::Chat));
                    true
                }
                TrackingAction::None => true,
                TrackingAction::Ignored => false,
            },
            ActiveScreen::Bookings(screen) => match screen.handle_key(key) {
                BookingsAction::None => true,
                BookingsAction::Ignored => false,
            },
            ActiveScreen::WorkerHome(screen) => match screen.handle_key(key) {
                WorkerHomeAction::AcceptJob(job) => {
                    self.dispatch(NavEvent::OpenJob(job));
                    true
                }
                WorkerHomeAction::None => true,
                WorkerHomeAction::Ignored => false,
            },
            ActiveScreen::ActiveJob(screen) => match screen.handle_key(key) {
                ActiveJobAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                ActiveJobAction::None => true,
                ActiveJobAction::Ignored => false,
            },
            ActiveScreen::Wallet(screen) => match screen.handle_key(key) {
                WalletAction::TopUpRequested(amount) => {
                    self.spawn_top_up(amount);
                    true
                }
                WalletAction::None => true,
                WalletAction::Ignored => false,
            },
            ActiveScreen::Profile(screen) => match screen.handle_key(key) {
                ProfileAction::LogoutRequested => {
                    info!("Logging out");
                    self.dispatch(NavEvent::Logout);
                    true
                }
                ProfileAction::None => true,
                ProfileAction::Ignored => false,
            },
            ActiveScreen::Chat(screen) => match screen.handle_key(key) {
                ChatAction::BackRequested => {
                    self.dispatch(NavEvent::Back);
                    true
                }
                ChatAction::None => true,
                ChatAction::Ignored => false,
            },
            ActiveScreen::NotFound(_) => false,
        };

        if !consumed {
            self.handle_global_key(key);
        }

        EventResult::Continue
    }

    /// Keys no screen claimed: back, and the nav-bar slots.
    fn handle_global_key(&mut self, key: KeyEvent) {
        if EventHandler::is_back_event(&key) {
            self.dispatch(NavEvent::Back);
            return;
        }

        let nav_visible =
            self.session.current_screen().shows_nav_bar() && self.session.user_mode().is_some();
        if !nav_visible {
            return;
        }

        if let (Some(slot), Some(mode)) = (EventHandler::nav_slot(&key), self.session.user_mode())
        {
            let target = items_for(mode)[slot].target;
            debug!(slot, target = %target, "Nav bar shortcut");
            self.dispatch(NavEvent::Navigate(target));
        }
    }

    fn spawn_request_code(&self, raw_phone: String) {
        let use_case = self.otp_login.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.request_code(&raw_phone).await;
            let _ = tx.send(Action::CodeSent(result));
        });
    }

    fn spawn_verify_code(&self, code: String) {
        let ActiveScreen::Auth(screen) = &self.screen else {
            return;
        };
        let Some(phone) = screen.phone().cloned() else {
            warn!("Verify requested with no phone on record");
            return;
        };

        let use_case = self.otp_login.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.verify_code(&phone, &code).await;
            let _ = tx.send(Action::CodeVerified(result));
        });
    }

    fn spawn_pick_media(&self, kind: MediaKind) {
        let picker = self.media_picker.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = picker.pick(kind).await;
            let _ = tx.send(Action::MediaPicked(kind, result));
        });
    }

    fn spawn_enrollment(&self, form: EnrollmentForm) {
        let use_case = self.enroll_worker.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = use_case.execute(&form).await;
            let _ = tx.send(Action::EnrollmentFinished(result));
        });
    }

    fn spawn_booking_step(&self) {
        let latency = Duration::from_millis(self.config.simulation.latency_ms * 4 / 5);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = tx.send(Action::BookingStepDone);
        });
    }

    fn spawn_top_up(&self, amount: u32) {
        let latency = Duration::from_millis(self.config.simulation.latency_ms);
        let use_case = self.wallet_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let result = use_case.top_up(amount).await;
            let _ = tx.send(Action::WalletUpdated(result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::CodeSent(Ok(phone)) => {
                if let ActiveScreen::Auth(screen) = &mut self.screen {
                    screen.on_code_sent(phone);
                }
            }
            Action::CodeSent(Err(e)) => {
                warn!(error = %e, "Code dispatch failed");
                if let ActiveScreen::Auth(screen) = &mut self.screen {
                    screen.on_error(friendly_auth_error(&e));
                }
            }
            Action::CodeVerified(Ok(())) => {
                self.dispatch(NavEvent::AuthSucceeded);
            }
            Action::CodeVerified(Err(e)) => {
                warn!(error = %e, "Code verification failed");
                if let ActiveScreen::Auth(screen) = &mut self.screen {
                    screen.on_error(friendly_auth_error(&e));
                }
            }
            Action::BookingStepDone => {
                if let ActiveScreen::Booking(screen) = &mut self.screen {
                    if *screen.step() == BookingStep::Payment {
                        let confirmation =
                            self.book_worker.confirm(screen.worker(), &screen.request());
                        screen.on_confirmed(confirmation);
                    } else {
                        screen.on_step_done();
                    }
                }
            }
            Action::MediaPicked(kind, Ok(media)) => {
                if let ActiveScreen::Onboarding(screen) = &mut self.screen {
                    screen.on_media_picked(kind, media);
                }
            }
            Action::MediaPicked(kind, Err(e)) => {
                warn!(kind = ?kind, error = %e, "Media selection failed");
                if let ActiveScreen::Onboarding(screen) = &mut self.screen {
                    screen.on_error(e.to_string());
                }
            }
            Action::EnrollmentFinished(Ok(EnrollmentOutcome::Submitted)) => {
                if let ActiveScreen::Onboarding(screen) = &mut self.screen {
                    screen.on_submitted();
                }
            }
            Action::EnrollmentFinished(Ok(EnrollmentOutcome::Incomplete(missing))) => {
                if let ActiveScreen::Onboarding(screen) = &mut self.screen {
                    screen.on_incomplete(&missing);
                }
            }
            Action::EnrollmentFinished(Err(e)) => {
                warn!(error = %e, "Enrollment submission failed");
                if let ActiveScreen::Onboarding(screen) = &mut self.screen {
                    screen.on_error(e.to_string());
                }
            }
            Action::WalletUpdated(Ok(snapshot)) => {
                self.wallet = snapshot.clone();
                if let ActiveScreen::Wallet(screen) = &mut self.screen {
                    screen.on_wallet_updated(snapshot);
                }
            }
            Action::WalletUpdated(Err(e)) => {
                warn!(error = %e, "Top-up failed");
                let wallet = self.wallet.clone();
                if let ActiveScreen::Wallet(screen) = &mut self.screen {
                    screen.on_wallet_updated(wallet);
                }
            }
        }
    }
}

fn friendly_auth_error(error: &AuthError) -> String {
    match error {
        AuthError::InvalidPhoneNumber { .. } => {
            "That number doesn't look right. Enter 10 digits.".to_string()
        }
        AuthError::InvalidCode { .. } => "Enter the full 4-digit code.".to_string(),
        AuthError::CodeRejected { .. } => "Code didn't match. Try again.".to_string(),
        AuthError::NetworkError { .. } => "Network error. Try again.".to_string(),
        AuthError::Unexpected { .. } => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use crate::domain::UserMode;
    use crate::domain::ports::mocks::{
        MockEnrollment, MockMarketData, MockMediaPicker, MockOtpGateway,
    };

    fn make_app() -> App {
        App::new(
            AppConfig::default(),
            Arc::new(MockMarketData::new()),
            Arc::new(MockOtpGateway::new(true)),
            Arc::new(MockEnrollment::new()),
            Arc::new(MockMediaPicker),
        )
    }

    #[test]
    fn test_app_starts_at_language_selection() {
        let app = make_app();
        assert_eq!(
            app.session().current_screen(),
            ScreenId::LanguageSelection
        );
        assert_eq!(app.session().user_mode(), None);
        assert!(matches!(app.screen, ActiveScreen::Language(_)));
    }

    #[test]
    fn test_dispatch_rebuilds_screen() {
        let mut app = make_app();
        app.dispatch(NavEvent::LanguageChosen(Language::Hi));
        assert!(matches!(app.screen, ActiveScreen::Splash(_)));

        app.dispatch(NavEvent::ModeChosen(UserMode::Customer));
        assert!(matches!(app.screen, ActiveScreen::Auth(_)));

        app.dispatch(NavEvent::AuthSucceeded);
        assert!(matches!(app.screen, ActiveScreen::CustomerHome(_)));
    }

    #[test]
    fn test_wallet_and_earnings_render_identically() {
        let mut app = make_app();
        app.dispatch(NavEvent::LanguageChosen(Language::En));
        app.dispatch(NavEvent::ModeChosen(UserMode::Customer));
        app.dispatch(NavEvent::AuthSucceeded);

        app.dispatch(NavEvent::Navigate(ScreenId::Wallet));
        assert!(matches!(app.screen, ActiveScreen::Wallet(_)));

        app.dispatch(NavEvent::Navigate(ScreenId::Earnings));
        assert!(matches!(app.screen, ActiveScreen::Wallet(_)));
        assert_eq!(app.session().current_screen(), ScreenId::Earnings);
    }

    #[test]
    fn test_active_job_without_selection_uses_default_job() {
        let mut app = make_app();
        app.dispatch(NavEvent::LanguageChosen(Language::En));
        app.dispatch(NavEvent::ModeChosen(UserMode::Worker));
        app.dispatch(NavEvent::AuthSucceeded);
        app.dispatch(NavEvent::OnboardingComplete);

        app.dispatch(NavEvent::Navigate(ScreenId::ActiveJob));
        match &app.screen {
            ActiveScreen::ActiveJob(screen) => {
                assert!(!screen.job().customer_name().is_empty());
            }
            _ => panic!("expected active job screen"),
        }
    }

    #[test]
    fn test_guarded_event_leaves_screen_alone() {
        let mut app = make_app();
        app.dispatch(NavEvent::LanguageChosen(Language::En));
        app.dispatch(NavEvent::ModeChosen(UserMode::Customer));
        app.dispatch(NavEvent::AuthSucceeded);

        // No worker selected: the booking guard holds.
        app.dispatch(NavEvent::Navigate(ScreenId::BookingFlow));
        assert!(matches!(app.screen, ActiveScreen::CustomerHome(_)));
    }

    #[test]
    fn test_logout_returns_to_language_selection() {
        let mut app = make_app();
        app.dispatch(NavEvent::LanguageChosen(Language::Ta));
        app.dispatch(NavEvent::ModeChosen(UserMode::Customer));
        app.dispatch(NavEvent::AuthSucceeded);
        app.dispatch(NavEvent::Navigate(ScreenId::Profile));
        app.dispatch(NavEvent::Logout);

        assert!(matches!(app.screen, ActiveScreen::Language(_)));
        assert_eq!(app.session().language(), Language::Ta);
    }
}
