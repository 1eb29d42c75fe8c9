//! Data source error types.

use thiserror::Error;

/// Errors raised by the marketplace data source and upload paths.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DataError {
    #[error("seed data corrupted: {message}")]
    SeedCorrupted { message: String },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("upload failed: {message}")]
    UploadFailed { message: String },

    #[error("media picker unavailable: {message}")]
    MediaUnavailable { message: String },

    #[error("network error: {message}")]
    NetworkError { message: String },

    #[error("invalid amount: {reason}")]
    InvalidAmount { reason: String },
}

impl DataError {
    /// Creates seed corruption error.
    #[must_use]
    pub fn seed_corrupted(message: impl Into<String>) -> Self {
        Self::SeedCorrupted {
            message: message.into(),
        }
    }

    /// Creates not-found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Creates upload error.
    #[must_use]
    pub fn upload_failed(message: impl Into<String>) -> Self {
        Self::UploadFailed {
            message: message.into(),
        }
    }

    /// Creates media picker error.
    #[must_use]
    pub fn media_unavailable(message: impl Into<String>) -> Self {
        Self::MediaUnavailable {
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

    /// Creates invalid amount error.
    #[must_use]
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        Self::seed_corrupted(err.to_string())
    }
}
