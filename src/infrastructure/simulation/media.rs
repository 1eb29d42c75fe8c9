//! Stub media picker.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::DataError;
use crate::domain::ports::{MediaKind, MediaPickerPort, MediaRef};

/// Stands in for camera/gallery selection: returns a deterministic
/// local path per document kind, as if the user had just picked one.
pub struct StubMediaPicker;

impl StubMediaPicker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StubMediaPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaPickerPort for StubMediaPicker {
    async fn pick(&self, kind: MediaKind) -> Result<MediaRef, DataError> {
        let file = match kind {
            MediaKind::ProfilePhoto => "profile_photo.jpg",
            MediaKind::IdFront => "id_front.jpg",
            MediaKind::IdBack => "id_back.jpg",
            MediaKind::BankProof => "bank_proof.jpg",
        };
        debug!(kind = ?kind, file, "Stub media selection");
        Ok(MediaRef::new(format!("~/Pictures/mistri/{file}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pick_is_deterministic() {
        let picker = StubMediaPicker::new();
        let first = picker.pick(MediaKind::IdFront).await.unwrap();
        let second = picker.pick(MediaKind::IdFront).await.unwrap();
        assert_eq!(first, second);
        assert!(first.as_str().ends_with("id_front.jpg"));
    }
}
