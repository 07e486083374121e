use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Minimum duration, in hours, for a reservation to count as "long".
pub const LONG_RESERVATION_HOURS: u32 = 3;

/// A single booking record read from the pipe-delimited export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    /// Reservation number, unique within one export file.
    pub id: u32,
    /// Name of the person who made the booking.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Calendar date of the booking.
    pub date: NaiveDate,
    /// Clock time the booking starts.
    pub start_time: NaiveTime,
    /// Booked duration in whole hours.  Always greater than zero.
    pub duration_hours: u32,
    /// Price per hour in euros.  Always finite and non-negative.
    pub hourly_price: f64,
    /// Whether the reservation has been paid and confirmed.
    pub confirmed: bool,
    /// Booked room or location.
    pub resource: String,
    /// When the record was entered.  Older exports omit this field.
    #[serde(default)]
    pub created: Option<NaiveDateTime>,
}

impl Reservation {
    /// Whether the reservation lasts [`LONG_RESERVATION_HOURS`] or more.
    pub fn is_long(&self) -> bool {
        self.duration_hours >= LONG_RESERVATION_HOURS
    }

    /// Total price of the booking: duration times hourly price.
    pub fn total_price(&self) -> f64 {
        f64::from(self.duration_hours) * self.hourly_price
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
