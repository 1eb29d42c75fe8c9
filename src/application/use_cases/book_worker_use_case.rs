//! Booking use case.

use tracing::info;
use uuid::Uuid;

use crate::application::dto::{BookingConfirmation, BookingQuote, BookingRequest};
use crate::domain::entities::Worker;

/// Produces quotes for the review step and confirmations at checkout.
///
/// Pricing is entirely client-side today; the confirmation reference is
/// generated locally where a backend would assign one.
#[derive(Clone, Default)]
pub struct BookWorkerUseCase;

impl BookWorkerUseCase {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Quotes a standard visit for the given worker.
    #[must_use]
    pub fn quote(&self, worker: &Worker) -> BookingQuote {
        BookingQuote::for_worker(worker)
    }

    /// Confirms a completed wizard and issues a booking reference.
    #[must_use]
    pub fn confirm(&self, worker: &Worker, request: &BookingRequest) -> BookingConfirmation {
        let quote = self.quote(worker);
        let reference = format!("BK-{}", Uuid::new_v4().simple());

        info!(
            reference = %reference,
            worker = %worker.id(),
            method = ?request.payment_method,
            total = quote.total,
            "Booking confirmed"
        );

        BookingConfirmation {
            reference,
            worker_name: worker.name().to_string(),
            total: quote.total,
        }
    }
}
