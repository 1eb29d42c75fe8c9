//! Job entity.

use serde::{Deserialize, Serialize};

/// Opaque job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

impl JobId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Lifecycle status of a job as reported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    Pending,
    Accepted,
    InProgress,
    Completed,
}

impl JobStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

/// A job request visible to a worker. Never mutated by the navigation
/// core; screens only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    id: JobId,
    customer_name: String,
    job_type: String,
    status: JobStatus,
    date: String,
    amount: u32,
    location: String,
    description: String,
}

impl Job {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        customer_name: impl Into<String>,
        job_type: impl Into<String>,
        amount: u32,
    ) -> Self {
        Self {
            id: JobId::new(id),
            customer_name: customer_name.into(),
            job_type: job_type.into(),
            status: JobStatus::Pending,
            date: String::new(),
            amount,
            location: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The job substituted when a screen needs a job but none was
    /// selected. Keeps the active-job screen renderable from any path.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("j0", "Suresh Raina", "Masonry Work", 1200)
            .with_date("Today, 10:00 AM")
            .with_location("Sector 42, Green Valley")
            .with_description("Repair boundary wall cracks and plastering.")
    }

    #[must_use]
    pub const fn id(&self) -> &JobId {
        &self.id
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Quoted amount in whole rupees.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("j1", "Anita Desai", "Tile Fitting", 3500)
            .with_status(JobStatus::Completed)
            .with_location("Block C, Highrise Apts");

        assert_eq!(job.id().as_str(), "j1");
        assert_eq!(job.status(), JobStatus::Completed);
        assert_eq!(job.amount(), 3500);
    }

    #[test]
    fn test_status_from_seed_shape() {
        let status: JobStatus = serde_json::from_str(r#""IN_PROGRESS""#).unwrap();
        assert_eq!(status, JobStatus::InProgress);
    }

    #[test]
    fn test_placeholder_is_renderable() {
        let job = Job::placeholder();
        assert!(!job.customer_name().is_empty());
        assert!(!job.location().is_empty());
        assert!(job.amount() > 0);
    }
}
