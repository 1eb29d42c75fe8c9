//! Simulated network edges.
//!
//! Each adapter resolves successfully after a configurable latency.
//! Real gateways replace them behind the same ports.

mod enrollment;
mod media;
mod otp;

pub use enrollment::SimulatedEnrollmentService;
pub use media::StubMediaPicker;
pub use otp::SimulatedOtpGateway;
