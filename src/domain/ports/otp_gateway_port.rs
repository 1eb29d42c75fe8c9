//! OTP gateway port definition.

use async_trait::async_trait;

use crate::domain::entities::PhoneNumber;
use crate::domain::errors::AuthError;

/// Port for sending and verifying one-time login codes.
///
/// The contract is latency-shaped, not clock-shaped: an operation
/// resolves successfully after some delay, so a real SMS gateway can
/// replace the simulated one without touching any state machine.
#[async_trait]
pub trait OtpGatewayPort: Send + Sync {
    /// Sends a one-time code to the given number.
    async fn send_code(&self, phone: &PhoneNumber) -> Result<(), AuthError>;

    /// Verifies a previously sent code.
    async fn verify_code(&self, phone: &PhoneNumber, code: &str) -> Result<(), AuthError>;
}
