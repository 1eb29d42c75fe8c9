//! Validated phone number.

use serde::{Deserialize, Serialize};

/// A ten-digit Indian mobile number, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Number of digits a valid mobile number carries.
    pub const DIGITS: usize = 10;

    /// Validates and wraps a raw number. Returns `None` unless the
    /// input is exactly ten ASCII digits.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        if raw.len() == Self::DIGITS && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats with the country prefix, `+91 98765 43210`.
    #[must_use]
    pub fn display_with_prefix(&self) -> String {
        format!("+91 {} {}", &self.0[..5], &self.0[5..])
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_number() {
        let phone = PhoneNumber::new("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
        assert_eq!(phone.display_with_prefix(), "+91 98765 43210");
    }

    #[test]
    fn test_rejects_short_number() {
        assert!(PhoneNumber::new("98765").is_none());
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(PhoneNumber::new("987654321x").is_none());
        assert!(PhoneNumber::new("9876 54321").is_none());
    }
}
