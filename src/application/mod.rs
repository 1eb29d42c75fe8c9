//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{BookingConfirmation, BookingQuote, BookingRequest, EnrollmentForm, PaymentMethod};
pub use services::{Translator, WorkerSearch};
pub use use_cases::{BookWorkerUseCase, EnrollWorkerUseCase, OtpLoginUseCase, WalletUseCase};
