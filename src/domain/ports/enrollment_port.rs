//! Worker enrollment port definition.

use async_trait::async_trait;

use crate::domain::errors::DataError;

use super::media_picker_port::MediaRef;

/// Everything the onboarding wizard collects before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentSubmission {
    /// Worker's full name.
    pub full_name: String,
    /// Selected skill category id.
    pub skill: String,
    /// Years of experience, free-form as entered.
    pub experience_years: u32,
    /// Profile photo reference.
    pub profile_photo: MediaRef,
    /// Identity document, front side.
    pub id_front: MediaRef,
    /// Identity document, back side.
    pub id_back: MediaRef,
    /// Bank passbook or cancelled cheque.
    pub bank_proof: MediaRef,
}

/// Port for submitting a worker's verification documents.
#[async_trait]
pub trait EnrollmentPort: Send + Sync {
    /// Uploads the submission for manual verification.
    async fn submit(&self, submission: EnrollmentSubmission) -> Result<(), DataError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Mock enrollment sink recording submissions.
    #[derive(Clone)]
    pub struct MockEnrollment {
        submissions: Arc<Mutex<Vec<EnrollmentSubmission>>>,
    }

    impl MockEnrollment {
        /// Creates new mock.
        #[must_use]
        pub fn new() -> Self {
            Self {
                submissions: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Submissions received so far.
        #[must_use]
        pub fn submissions(&self) -> Vec<EnrollmentSubmission> {
            self.submissions.lock().clone()
        }
    }

    impl Default for MockEnrollment {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl EnrollmentPort for MockEnrollment {
        async fn submit(&self, submission: EnrollmentSubmission) -> Result<(), DataError> {
            self.submissions.lock().push(submission);
            Ok(())
        }
    }
}
