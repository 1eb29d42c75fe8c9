//! Worker enrollment use case.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::dto::EnrollmentForm;
use crate::domain::errors::DataError;
use crate::domain::ports::EnrollmentPort;

/// Outcome of an enrollment attempt.
#[derive(Debug)]
pub enum EnrollmentOutcome {
    /// Documents accepted; verification is pending.
    Submitted,
    /// Form incomplete; labels of the missing fields.
    Incomplete(Vec<&'static str>),
}

/// Validates the onboarding form and submits it for verification.
#[derive(Clone)]
pub struct EnrollWorkerUseCase {
    enrollment: Arc<dyn EnrollmentPort>,
}

impl EnrollWorkerUseCase {
    /// Creates new enrollment use case.
    #[must_use]
    pub const fn new(enrollment: Arc<dyn EnrollmentPort>) -> Self {
        Self { enrollment }
    }

    /// Validates and submits the form.
    ///
    /// An incomplete form is an [`EnrollmentOutcome::Incomplete`], not
    /// an error: the wizard surfaces it inline and the user retries.
    ///
    /// # Errors
    /// Returns error only if the upload itself fails.
    pub async fn execute(&self, form: &EnrollmentForm) -> Result<EnrollmentOutcome, DataError> {
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(missing) => {
                warn!(missing = ?missing, "Enrollment form incomplete");
                return Ok(EnrollmentOutcome::Incomplete(missing));
            }
        };

        self.enrollment.submit(submission).await?;

        info!("Enrollment submitted for verification");
        Ok(EnrollmentOutcome::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MediaRef;
    use crate::domain::ports::mocks::MockEnrollment;

    fn complete_form() -> EnrollmentForm {
        EnrollmentForm {
            full_name: "Raju Yadav".to_string(),
            skill: "mason".to_string(),
            experience_years: Some(5),
            profile_photo: Some(MediaRef::new("/tmp/photo.jpg")),
            id_front: Some(MediaRef::new("/tmp/front.jpg")),
            id_back: Some(MediaRef::new("/tmp/back.jpg")),
            bank_proof: Some(MediaRef::new("/tmp/bank.jpg")),
        }
    }

    #[tokio::test]
    async fn test_complete_form_submits() {
        let sink = MockEnrollment::new();
        let use_case = EnrollWorkerUseCase::new(Arc::new(sink.clone()));

        let outcome = use_case.execute(&complete_form()).await.unwrap();
        assert!(matches!(outcome, EnrollmentOutcome::Submitted));
        assert_eq!(sink.submissions().len(), 1);
        assert_eq!(sink.submissions()[0].skill, "mason");
    }

    #[tokio::test]
    async fn test_incomplete_form_does_not_submit() {
        let sink = MockEnrollment::new();
        let use_case = EnrollWorkerUseCase::new(Arc::new(sink.clone()));

        let mut form = complete_form();
        form.bank_proof = None;

        let outcome = use_case.execute(&form).await.unwrap();
        match outcome {
            EnrollmentOutcome::Incomplete(missing) => {
                assert_eq!(missing, vec!["bank proof"]);
            }
            EnrollmentOutcome::Submitted => panic!("should not submit"),
        }
        assert!(sink.submissions().is_empty());
    }
}
