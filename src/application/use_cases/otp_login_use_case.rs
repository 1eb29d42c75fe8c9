//! Phone/OTP login use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::PhoneNumber;
use crate::domain::errors::AuthError;
use crate::domain::ports::OtpGatewayPort;

/// Expected length of a one-time code.
pub const OTP_DIGITS: usize = 4;

/// Drives the two-step phone login: request a code, then verify it.
#[derive(Clone)]
pub struct OtpLoginUseCase {
    gateway: Arc<dyn OtpGatewayPort>,
}

impl OtpLoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(gateway: Arc<dyn OtpGatewayPort>) -> Self {
        Self { gateway }
    }

    /// Validates the number and asks the gateway to send a code.
    ///
    /// # Errors
    /// Returns error if the number is malformed or the gateway fails.
    pub async fn request_code(&self, raw_phone: &str) -> Result<PhoneNumber, AuthError> {
        let phone = PhoneNumber::new(raw_phone).ok_or_else(|| {
            warn!("Malformed phone number entered");
            AuthError::invalid_phone("expected exactly 10 digits")
        })?;

        debug!(phone = %phone, "Requesting one-time code");
        self.gateway.send_code(&phone).await?;

        info!(phone = %phone, "One-time code sent");
        Ok(phone)
    }

    /// Verifies an entered code against the gateway.
    ///
    /// # Errors
    /// Returns error if the code is malformed or rejected.
    pub async fn verify_code(&self, phone: &PhoneNumber, code: &str) -> Result<(), AuthError> {
        if code.len() != OTP_DIGITS || !code.bytes().all(|b| b.is_ascii_digit()) {
            warn!("Malformed one-time code entered");
            return Err(AuthError::invalid_code("expected exactly 4 digits"));
        }

        debug!(phone = %phone, "Verifying one-time code");
        self.gateway.verify_code(phone, code).await.map_err(|e| {
            warn!(error = %e, "Code verification failed");
            e
        })?;

        info!(phone = %phone, "Authenticated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockOtpGateway;

    #[tokio::test]
    async fn test_request_code_valid_number() {
        let gateway = Arc::new(MockOtpGateway::new(true));
        let use_case = OtpLoginUseCase::new(gateway.clone());

        let phone = use_case.request_code("9876543210").await.unwrap();
        assert_eq!(phone.as_str(), "9876543210");
        assert_eq!(gateway.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_request_code_rejects_short_number() {
        let gateway = Arc::new(MockOtpGateway::new(true));
        let use_case = OtpLoginUseCase::new(gateway.clone());

        let result = use_case.request_code("98765").await;
        assert!(matches!(result, Err(AuthError::InvalidPhoneNumber { .. })));
        assert_eq!(gateway.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_verify_code_success() {
        let use_case = OtpLoginUseCase::new(Arc::new(MockOtpGateway::new(true)));
        let phone = PhoneNumber::new("9876543210").unwrap();

        assert!(use_case.verify_code(&phone, "4812").await.is_ok());
    }

    #[tokio::test]
    async fn test_verify_code_rejects_short_code() {
        let use_case = OtpLoginUseCase::new(Arc::new(MockOtpGateway::new(true)));
        let phone = PhoneNumber::new("9876543210").unwrap();

        let result = use_case.verify_code(&phone, "48").await;
        assert!(matches!(result, Err(AuthError::InvalidCode { .. })));
    }

    #[tokio::test]
    async fn test_verify_code_gateway_rejection() {
        let use_case = OtpLoginUseCase::new(Arc::new(MockOtpGateway::new(false)));
        let phone = PhoneNumber::new("9876543210").unwrap();

        let result = use_case.verify_code(&phone, "1234").await;
        assert!(matches!(result, Err(AuthError::CodeRejected { .. })));
    }
}
