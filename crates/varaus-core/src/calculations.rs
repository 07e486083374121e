//! Aggregate calculations over a loaded reservation list.
//!
//! Pure functions with no I/O; the reports layer turns these values into
//! display strings.

use crate::models::Reservation;

// ── ConfirmationCounts ────────────────────────────────────────────────────────

/// Confirmed vs not-confirmed record counts across one reservation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmationCounts {
    pub confirmed: usize,
    pub not_confirmed: usize,
}

impl ConfirmationCounts {
    /// Total number of records counted.
    pub fn total(&self) -> usize {
        self.confirmed + self.not_confirmed
    }
}

// ── Calculations ──────────────────────────────────────────────────────────────

/// Count confirmed and not-confirmed reservations.
///
/// The two counts always sum to `reservations.len()`.
pub fn count_confirmations(reservations: &[Reservation]) -> ConfirmationCounts {
    let mut counts = ConfirmationCounts::default();
    for reservation in reservations {
        if reservation.confirmed {
            counts.confirmed += 1;
        } else {
            counts.not_confirmed += 1;
        }
    }
    counts
}

/// Sum of `duration × hourly price` over confirmed reservations only.
pub fn confirmed_revenue(reservations: &[Reservation]) -> f64 {
    reservations
        .iter()
        .filter(|r| r.confirmed)
        .map(Reservation::total_price)
        .sum()
}

/// Find a reservation by its id with a linear scan.
pub fn find_by_id(reservations: &[Reservation], id: u32) -> Option<&Reservation> {
    reservations.iter().find(|r| r.id == id)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
