//! Simulated enrollment upload.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::domain::errors::DataError;
use crate::domain::ports::{EnrollmentPort, EnrollmentSubmission};

/// Stands in for the document upload service. Uploads take longer than
/// the base latency, matching the heavier payload.
pub struct SimulatedEnrollmentService {
    latency: Duration,
}

impl SimulatedEnrollmentService {
    const UPLOAD_FACTOR: u32 = 3;

    #[must_use]
    pub fn new(base_latency: Duration) -> Self {
        Self {
            latency: base_latency * Self::UPLOAD_FACTOR / 2,
        }
    }
}

#[async_trait]
impl EnrollmentPort for SimulatedEnrollmentService {
    async fn submit(&self, submission: EnrollmentSubmission) -> Result<(), DataError> {
        debug!(name = %submission.full_name, skill = %submission.skill, "Simulating document upload");
        sleep(self.latency).await;
        info!(name = %submission.full_name, "Enrollment accepted, verification pending");
        Ok(())
    }
}
