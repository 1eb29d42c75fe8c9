//! Media picker port definition.

use async_trait::async_trait;

use crate::domain::errors::DataError;

/// What the picked image will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    ProfilePhoto,
    IdFront,
    IdBack,
    BankProof,
}

impl MediaKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfilePhoto => "Profile photo",
            Self::IdFront => "ID front",
            Self::IdBack => "ID back",
            Self::BankProof => "Bank proof",
        }
    }
}

/// Local reference to a selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef(String);

impl MediaRef {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MediaRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for camera/gallery image selection.
#[async_trait]
pub trait MediaPickerPort: Send + Sync {
    /// Lets the user pick or capture an image, returning a local
    /// reference to it.
    async fn pick(&self, kind: MediaKind) -> Result<MediaRef, DataError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock picker returning a deterministic path per kind.
    pub struct MockMediaPicker;

    #[async_trait]
    impl MediaPickerPort for MockMediaPicker {
        async fn pick(&self, kind: MediaKind) -> Result<MediaRef, DataError> {
            Ok(MediaRef::new(format!("/tmp/mock-{:?}.jpg", kind)))
        }
    }
}
