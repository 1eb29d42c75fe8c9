//! Authentication error types.

use thiserror::Error;

/// Errors raised by the phone/OTP login flow.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid phone number: {reason}")]
    InvalidPhoneNumber { reason: String },

    #[error("invalid one-time code: {reason}")]
    InvalidCode { reason: String },

    #[error("one-time code rejected: {message}")]
    CodeRejected { message: String },

    #[error("network error during authentication: {message}")]
    NetworkError { message: String },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates invalid phone number error.
    #[must_use]
    pub fn invalid_phone(reason: impl Into<String>) -> Self {
        Self::InvalidPhoneNumber {
            reason: reason.into(),
        }
    }

    /// Creates invalid code error.
    #[must_use]
    pub fn invalid_code(reason: impl Into<String>) -> Self {
        Self::InvalidCode {
            reason: reason.into(),
        }
    }

    /// Creates code rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::CodeRejected {
            message: message.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Whether retrying the same input can succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::CodeRejected { .. })
    }
}
