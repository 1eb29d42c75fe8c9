//! Mistri - a terminal client for booking local gig workers.
//!
//! Customers find and book manual-labour workers; workers receive and
//! run jobs. Navigation is a pure reducer over a single session state,
//! rendered through a ratatui front end against an embedded mock
//! dataset with simulated network latency.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Domain layer containing entities, the navigation reducer, errors,
/// and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "mistri";
