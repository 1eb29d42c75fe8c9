//! Worker entity.

use serde::{Deserialize, Serialize};

use super::category::CategoryId;

/// Opaque worker identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkerId(String);

impl WorkerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WorkerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A worker listed on the marketplace. Read-only for the lifetime of a
/// session; the navigation core only ever selects one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    name: String,
    category: CategoryId,
    rating: f32,
    jobs_completed: u32,
    hourly_rate: u32,
    experience_years: u32,
    verified: bool,
    image: String,
}

impl Worker {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        rating: f32,
        hourly_rate: u32,
    ) -> Self {
        Self {
            id: WorkerId::new(id),
            name: name.into(),
            category: CategoryId::new(category),
            rating,
            jobs_completed: 0,
            hourly_rate,
            experience_years: 0,
            verified: false,
            image: String::new(),
        }
    }

    #[must_use]
    pub const fn with_jobs_completed(mut self, count: u32) -> Self {
        self.jobs_completed = count;
        self
    }

    #[must_use]
    pub const fn with_experience_years(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    #[must_use]
    pub const fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub const fn id(&self) -> &WorkerId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryId {
        &self.category
    }

    #[must_use]
    pub const fn rating(&self) -> f32 {
        self.rating
    }

    #[must_use]
    pub const fn jobs_completed(&self) -> u32 {
        self.jobs_completed
    }

    /// Hourly rate in whole rupees.
    #[must_use]
    pub const fn hourly_rate(&self) -> u32 {
        self.hourly_rate
    }

    #[must_use]
    pub const fn experience_years(&self) -> u32 {
        self.experience_years
    }

    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.verified
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_builder() {
        let worker = Worker::new("w1", "Rajesh Kumar", "mason", 4.8, 350)
            .with_jobs_completed(142)
            .with_experience_years(8)
            .with_verified(true);

        assert_eq!(worker.id().as_str(), "w1");
        assert_eq!(worker.name(), "Rajesh Kumar");
        assert_eq!(worker.category().as_str(), "mason");
        assert_eq!(worker.hourly_rate(), 350);
        assert_eq!(worker.jobs_completed(), 142);
        assert!(worker.is_verified());
    }

    #[test]
    fn test_worker_deserializes_from_seed_shape() {
        let json = r#"{
            "id": "w9",
            "name": "Test Worker",
            "category": "painter",
            "rating": 4.2,
            "jobs_completed": 10,
            "hourly_rate": 250,
            "experience_years": 4,
            "verified": true,
            "image": "seed/painter"
        }"#;

        let worker: Worker = serde_json::from_str(json).unwrap();
        assert_eq!(worker.name(), "Test Worker");
        assert_eq!(worker.experience_years(), 4);
    }
}
