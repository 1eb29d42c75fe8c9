//! Booking data transfer objects.

use crate::domain::entities::Worker;

/// Hours assumed for a standard visit when quoting.
const QUOTED_HOURS: u32 = 2;
/// Flat visiting charge in rupees.
const VISITING_CHARGE: u32 = 100;
/// GST rate applied on the subtotal.
const GST_RATE: f64 = 0.18;

/// How the customer pays at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    NetBanking,
    CashAfterWork,
}

impl PaymentMethod {
    /// All methods, in the order presented at checkout.
    pub const ALL: &'static [Self] = &[Self::Upi, Self::Card, Self::NetBanking, Self::CashAfterWork];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::Card => "Credit / Debit Card",
            Self::NetBanking => "Net Banking",
            Self::CashAfterWork => "Cash after Work",
        }
    }
}

/// Everything the booking wizard collects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingRequest {
    /// Chosen date label, e.g. `Mon 21`.
    pub date: String,
    /// Chosen time slot label, e.g. `10:00 AM`.
    pub time_slot: String,
    /// Free-form description of the work.
    pub description: String,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
}

/// Price breakdown shown on the review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingQuote {
    /// Labour for the quoted hours, in rupees.
    pub service_fee: u32,
    /// Flat visiting charge, in rupees.
    pub visiting_charge: u32,
    /// GST on the subtotal, in rupees.
    pub gst: u32,
    /// Rounded grand total, in rupees.
    pub total: u32,
}

impl BookingQuote {
    /// Quotes a standard two-hour visit for the given worker.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn for_worker(worker: &Worker) -> Self {
        let service_fee = worker.hourly_rate() * QUOTED_HOURS;
        let subtotal = service_fee + VISITING_CHARGE;
        let gst = (f64::from(subtotal) * GST_RATE).round() as u32;
        let total = (f64::from(subtotal) * (1.0 + GST_RATE)).round() as u32;

        Self {
            service_fee,
            visiting_charge: VISITING_CHARGE,
            gst,
            total,
        }
    }

    /// Hours covered by the service fee.
    #[must_use]
    pub const fn quoted_hours() -> u32 {
        QUOTED_HOURS
    }
}

/// Result of a confirmed booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// Server-side booking reference.
    pub reference: String,
    /// Name of the booked worker.
    pub worker_name: String,
    /// Total charged, in rupees.
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_for_mason() {
        // 350/hr: 700 labour + 100 visiting, 18% GST on 800.
        let worker = Worker::new("w1", "Rajesh Kumar", "mason", 4.8, 350);
        let quote = BookingQuote::for_worker(&worker);

        assert_eq!(quote.service_fee, 700);
        assert_eq!(quote.visiting_charge, 100);
        assert_eq!(quote.gst, 144);
        assert_eq!(quote.total, 944);
    }

    #[test]
    fn test_quote_rounds_total() {
        // 333/hr: subtotal 766, total 903.88 rounds to 904.
        let worker = Worker::new("w2", "Vikram Singh", "labour", 4.5, 333);
        let quote = BookingQuote::for_worker(&worker);
        assert_eq!(quote.total, 904);
    }

    #[test]
    fn test_payment_method_order() {
        assert_eq!(PaymentMethod::ALL.first(), Some(&PaymentMethod::Upi));
        assert_eq!(PaymentMethod::ALL.len(), 4);
    }
}
