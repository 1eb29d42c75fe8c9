//! Domain layer with core business entities, the navigation reducer,
//! and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Display languages.
pub mod language;
/// Navigation reducer and routing tables.
pub mod navigation;
/// Screen identifiers.
pub mod screen;
/// Cross-screen session state.
pub mod session;
/// Port definitions.
pub mod ports;

pub use language::Language;
pub use navigation::{NavEvent, back_target, reduce};
pub use screen::ScreenId;
pub use session::{Session, UserMode};
