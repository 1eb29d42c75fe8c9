mod enrollment_port;
mod market_data_port;
mod media_picker_port;
mod otp_gateway_port;

pub use enrollment_port::{EnrollmentPort, EnrollmentSubmission};
pub use market_data_port::{MarketDataPort, WalletSnapshot};
pub use media_picker_port::{MediaKind, MediaPickerPort, MediaRef};
pub use otp_gateway_port::OtpGatewayPort;

#[cfg(test)]
pub mod mocks {
    pub use super::enrollment_port::mock::MockEnrollment;
    pub use super::market_data_port::mock::MockMarketData;
    pub use super::media_picker_port::mock::MockMediaPicker;
    pub use super::otp_gateway_port::mock::MockOtpGateway;
}
