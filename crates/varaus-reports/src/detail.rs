//! Full per-reservation detail cards.

use varaus_core::formatting::{format_clock, format_date, format_euros, format_timestamp};
use varaus_core::models::Reservation;

/// Render every field of one reservation as a labelled card.
pub fn reservation_details(reservation: &Reservation) -> String {
    let mut lines = vec![
        format!("Reservation number: {}", reservation.id),
        format!("Booker: {}", reservation.name),
        format!("Date: {}", format_date(reservation.date)),
        format!("Start time: {}", format_clock(reservation.start_time)),
        format!("Number of hours: {}", reservation.duration_hours),
        format!("Hourly price: {}", format_euros(reservation.hourly_price)),
        format!("Total price: {}", format_euros(reservation.total_price())),
        format!(
            "Paid: {}",
            if reservation.confirmed { "Yes" } else { "No" }
        ),
        format!("Location: {}", reservation.resource),
        format!("Phone: {}", reservation.phone),
        format!("Email: {}", reservation.email),
    ];
    if let Some(created) = reservation.created {
        lines.push(format!("Created: {}", format_timestamp(created)));
    }
    lines.join("\n")
}

/// Render detail cards for every reservation, separated by blank lines.
pub fn all_details(reservations: &[Reservation]) -> String {
    reservations
        .iter()
        .map(reservation_details)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
