//! Simulated OTP gateway.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use crate::domain::entities::PhoneNumber;
use crate::domain::errors::AuthError;
use crate::domain::ports::OtpGatewayPort;

/// Stands in for an SMS gateway: every well-formed request succeeds
/// after the configured latency. The latency is the point — it keeps
/// the screens honest about in-flight states.
pub struct SimulatedOtpGateway {
    latency: Duration,
}

impl SimulatedOtpGateway {
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl OtpGatewayPort for SimulatedOtpGateway {
    async fn send_code(&self, phone: &PhoneNumber) -> Result<(), AuthError> {
        debug!(phone = %phone, "Simulating code dispatch");
        sleep(self.latency).await;
        Ok(())
    }

    async fn verify_code(&self, phone: &PhoneNumber, _code: &str) -> Result<(), AuthError> {
        debug!(phone = %phone, "Simulating code verification");
        sleep(self.latency).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolves_after_latency() {
        tokio::time::pause();

        let gateway = SimulatedOtpGateway::new(Duration::from_secs(1));
        let phone = PhoneNumber::new("9876543210").unwrap();

        let send = gateway.send_code(&phone);
        tokio::pin!(send);
        assert!(
            futures_util::poll!(send.as_mut()).is_pending(),
            "should not resolve immediately"
        );

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(send.await.is_ok());
    }

    #[tokio::test]
    async fn test_any_code_verifies() {
        tokio::time::pause();
        let gateway = SimulatedOtpGateway::new(Duration::from_millis(10));
        let phone = PhoneNumber::new("9876543210").unwrap();
        assert!(gateway.verify_code(&phone, "0000").await.is_ok());
    }
}
