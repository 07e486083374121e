//! Aggregate summary reports.

use varaus_core::calculations::{confirmed_revenue, count_confirmations};
use varaus_core::formatting::format_euros;
use varaus_core::models::Reservation;

/// Two-line summary of confirmed vs not-confirmed counts.
pub fn confirmation_summary(reservations: &[Reservation]) -> String {
    let counts = count_confirmations(reservations);
    format!(
        "- Confirmed reservations: {} pcs\n- Not confirmed reservations: {} pcs",
        counts.confirmed, counts.not_confirmed
    )
}

/// Total revenue over confirmed reservations, rendered in euros.
pub fn total_revenue(reservations: &[Reservation]) -> String {
    format!(
        "Total revenue from confirmed reservations: {}",
        format_euros(confirmed_revenue(reservations))
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn make_reservation(id: u32, duration_hours: u32, hourly_price: f64, confirmed: bool) -> Reservation {
        Reservation {
            id,
            name: format!("Booker {id}"),
            email: "booker@example.com".to_string(),
            phone: "040 1234567".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            duration_hours,
            hourly_price,
            confirmed,
            resource: "RoomA".to_string(),
            created: None,
        }
    }

    // ── confirmation_summary ─────────────────────────────────────────────────

    #[test]
    fn test_confirmation_summary() {
        let reservations = vec![
            make_reservation(1, 3, 20.0, true),
            make_reservation(2, 2, 15.0, false),
            make_reservation(3, 1, 10.0, true),
        ];
        assert_eq!(
            confirmation_summary(&reservations),
            "- Confirmed reservations: 2 pcs\n- Not confirmed reservations: 1 pcs"
        );
    }

    #[test]
    fn test_confirmation_summary_empty() {
        assert_eq!(
            confirmation_summary(&[]),
            "- Confirmed reservations: 0 pcs\n- Not confirmed reservations: 0 pcs"
        );
    }

    // ── total_revenue ────────────────────────────────────────────────────────

    #[test]
    fn test_total_revenue_reference_record() {
        // 3 h × 20,00 € confirmed → 60,00 €.
        let reservations = vec![make_reservation(1, 3, 20.0, true)];
        assert_eq!(
            total_revenue(&reservations),
            "Total revenue from confirmed reservations: 60,00 €"
        );
    }

    #[test]
    fn test_total_revenue_confirmed_only() {
        let reservations = vec![
            make_reservation(1, 3, 20.0, true),   // 60.0
            make_reservation(2, 10, 99.0, false), // excluded
            make_reservation(3, 2, 12.5, true),   // 25.0
        ];
        assert_eq!(
            total_revenue(&reservations),
            "Total revenue from confirmed reservations: 85,00 €"
        );
    }

    #[test]
    fn test_total_revenue_empty() {
        assert_eq!(
            total_revenue(&[]),
            "Total revenue from confirmed reservations: 0,00 €"
        );
    }
}
