//! Reusable widgets.

mod nav_bar;
mod otp_input;
mod text_input;

pub use nav_bar::{NavBar, NavItem, items_for};
pub use otp_input::OtpInput;
pub use text_input::TextInput;
