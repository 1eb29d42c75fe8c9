//! Use case implementations.

mod book_worker_use_case;
mod enroll_worker_use_case;
mod otp_login_use_case;
mod wallet_use_case;

pub use book_worker_use_case::BookWorkerUseCase;
pub use enroll_worker_use_case::{EnrollWorkerUseCase, EnrollmentOutcome};
pub use otp_login_use_case::{OTP_DIGITS, OtpLoginUseCase};
pub use wallet_use_case::WalletUseCase;
