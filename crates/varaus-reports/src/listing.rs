//! Per-reservation listing reports.

use varaus_core::formatting::{format_clock, format_date};
use varaus_core::models::Reservation;

/// One line per confirmed reservation:
/// `- {name}, {resource}, {date} at {time}`.
pub fn confirmed_reservations(reservations: &[Reservation]) -> String {
    reservations
        .iter()
        .filter(|r| r.confirmed)
        .map(|r| {
            format!(
                "- {}, {}, {} at {}",
                r.name,
                r.resource,
                format_date(r.date),
                format_clock(r.start_time)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per long reservation (three hours or more):
/// `- {name}, {date} at {time}, duration {hours} h, {resource}`.
pub fn long_reservations(reservations: &[Reservation]) -> String {
    reservations
        .iter()
        .filter(|r| r.is_long())
        .map(|r| {
            format!(
                "- {}, {} at {}, duration {} h, {}",
                r.name,
                format_date(r.date),
                format_clock(r.start_time),
                r.duration_hours,
                r.resource
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One status line per reservation: `{name} → Confirmed` or
/// `{name} → NOT Confirmed`.
pub fn confirmation_statuses(reservations: &[Reservation]) -> String {
    reservations
        .iter()
        .map(|r| {
            let status = if r.confirmed {
                "Confirmed"
            } else {
                "NOT Confirmed"
            };
            format!("{} → {}", r.name, status)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
