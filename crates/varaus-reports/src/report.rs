//! The full numbered report combining every section.

use varaus_core::models::Reservation;

use crate::{listing, summary};

/// Render the five numbered report sections in order.
///
/// Section headers are always printed; a section with no matching records
/// keeps an empty body.
pub fn full_report(reservations: &[Reservation]) -> String {
    let sections = [
        (
            "1) Confirmed Reservations",
            listing::confirmed_reservations(reservations),
        ),
        (
            "2) Long Reservations (≥ 3 h)",
            listing::long_reservations(reservations),
        ),
        (
            "3) Reservation Confirmation Status",
            listing::confirmation_statuses(reservations),
        ),
        (
            "4) Confirmation Summary",
            summary::confirmation_summary(reservations),
        ),
        (
            "5) Total Revenue from Confirmed Reservations",
            summary::total_revenue(reservations),
        ),
    ];

    sections
        .into_iter()
        .map(|(header, body)| {
            if body.is_empty() {
                header.to_string()
            } else {
                format!("{header}\n{body}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
