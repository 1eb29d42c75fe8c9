//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Embedded marketplace dataset.
pub mod data;
/// Simulated network adapters.
pub mod simulation;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use data::SeedMarketData;
pub use simulation::{SimulatedEnrollmentService, SimulatedOtpGateway, StubMediaPicker};
