//! Line parsing for the pipe-delimited reservation export.
//!
//! One line carries one reservation as 10 or 11 `|`-separated fields:
//! `id|name|email|phone|date|time|duration|price|confirmed|resource|created`,
//! where the trailing creation timestamp is absent from older exports.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use varaus_core::error::{Result, VarausError};
use varaus_core::models::Reservation;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse one non-blank export line into a [`Reservation`].
///
/// `line_number` is the 1-based physical line number, used only for error
/// messages. Every field is trimmed before conversion. Any malformed field
/// or a wrong field count is an error; there is no partial recovery.
pub fn parse_line(line: &str, line_number: usize) -> Result<Reservation> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() != 10 && fields.len() != 11 {
        return Err(VarausError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    }

    let id: u32 = fields[0]
        .parse()
        .map_err(|_| field_error(line_number, "id", fields[0], "not an integer"))?;

    let date = NaiveDate::parse_from_str(fields[4], DATE_FORMAT)
        .map_err(|_| field_error(line_number, "date", fields[4], "expected YYYY-MM-DD"))?;

    let start_time = NaiveTime::parse_from_str(fields[5], TIME_FORMAT)
        .map_err(|_| field_error(line_number, "time", fields[5], "expected HH:MM"))?;

    let duration_hours: u32 = fields[6]
        .parse()
        .map_err(|_| field_error(line_number, "duration", fields[6], "not an integer"))?;
    if duration_hours == 0 {
        return Err(field_error(
            line_number,
            "duration",
            fields[6],
            "must be greater than zero",
        ));
    }

    let hourly_price: f64 = fields[7]
        .parse()
        .map_err(|_| field_error(line_number, "price", fields[7], "not a number"))?;
    if !hourly_price.is_finite() || hourly_price < 0.0 {
        return Err(field_error(
            line_number,
            "price",
            fields[7],
            "must be a non-negative number",
        ));
    }

    let confirmed = match fields[8] {
        "True" => true,
        "False" => false,
        other => {
            return Err(field_error(
                line_number,
                "confirmed",
                other,
                "expected True or False",
            ))
        }
    };

    // A 10-field line simply predates the created column; an 11th field,
    // even an empty one, must parse.
    let created = if fields.len() == 11 {
        let ts = NaiveDateTime::parse_from_str(fields[10], CREATED_FORMAT).map_err(|_| {
            field_error(
                line_number,
                "created",
                fields[10],
                "expected YYYY-MM-DD HH:MM:SS",
            )
        })?;
        Some(ts)
    } else {
        None
    };

    Ok(Reservation {
        id,
        name: fields[1].to_string(),
        email: fields[2].to_string(),
        phone: fields[3].to_string(),
        date,
        start_time,
        duration_hours,
        hourly_price,
        confirmed,
        resource: fields[9].to_string(),
        created,
    })
}

fn field_error(line: usize, field: &'static str, value: &str, reason: &str) -> VarausError {
    VarausError::Field {
        line,
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const JANE: &str = "1|Jane|j@x.com|555|2025-05-01|14:00|3|20.0|True|RoomA|2025-04-01 10:00:00";

    // ── well-formed lines ────────────────────────────────────────────────────

    #[test]
    fn test_parse_line_full() {
        let r = parse_line(JANE, 1).expect("well-formed line");
        assert_eq!(r.id, 1);
        assert_eq!(r.name, "Jane");
        assert_eq!(r.email, "j@x.com");
        assert_eq!(r.phone, "555");
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
        assert_eq!(r.start_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(r.duration_hours, 3);
        assert!((r.hourly_price - 20.0).abs() < 1e-9);
        assert!(r.confirmed);
        assert_eq!(r.resource, "RoomA");
        let created = r.created.expect("created present");
        assert_eq!(
            created,
            NaiveDate::from_ymd_opt(2025, 4, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_line_without_created() {
        let line = "2|Bob|b@x.com|556|2025-05-02|09:30|1|15.5|False|RoomB";
        let r = parse_line(line, 1).expect("10-field line");
        assert_eq!(r.id, 2);
        assert!(!r.confirmed);
        assert!(r.created.is_none());
    }

    #[test]
    fn test_parse_line_trims_fields() {
        let line = " 3 | Carol | c@x.com | 557 | 2025-05-03 | 10:00 | 2 | 12.5 | True | RoomC ";
        let r = parse_line(line, 1).expect("padded line");
        assert_eq!(r.id, 3);
        assert_eq!(r.name, "Carol");
        assert_eq!(r.resource, "RoomC");
    }

    // ── field count ──────────────────────────────────────────────────────────

    #[test]
    fn test_too_few_fields() {
        let err = parse_line("1|Jane|j@x.com", 4).unwrap_err();
        assert_eq!(err.to_string(), "Line 4: expected 10 or 11 fields, found 3");
    }

    #[test]
    fn test_too_many_fields() {
        let line = format!("{JANE}|extra");
        let err = parse_line(&line, 2).unwrap_err();
        assert!(err.to_string().contains("found 12"));
    }

    // ── malformed fields ─────────────────────────────────────────────────────

    #[test]
    fn test_bad_id() {
        let line = JANE.replace("1|Jane", "one|Jane");
        let err = parse_line(&line, 7).unwrap_err();
        assert_eq!(err.to_string(), "Line 7: invalid id 'one': not an integer");
    }

    #[test]
    fn test_bad_date() {
        let line = JANE.replace("2025-05-01", "01.05.2025");
        let err = parse_line(&line, 1).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_bad_time() {
        let line = JANE.replace("14:00", "14h00");
        let err = parse_line(&line, 1).unwrap_err();
        assert!(err.to_string().contains("invalid time"));
    }

    #[test]
    fn test_zero_duration() {
        let line = JANE.replace("|3|20.0|", "|0|20.0|");
        let err = parse_line(&line, 1).unwrap_err();
        assert!(err.to_string().contains("must be greater than zero"));
    }

    #[test]
    fn test_negative_price() {
        let line = JANE.replace("|20.0|", "|-20.0|");
        let err = parse_line(&line, 1).unwrap_err();
        assert!(err.to_string().contains("must be a non-negative number"));
    }

    #[test]
    fn test_non_numeric_price() {
        let line = JANE.replace("|20.0|", "|twenty|");
        let err = parse_line(&line, 1).unwrap_err();
        assert!(err.to_string().contains("invalid price"));
    }

    #[test]
    fn test_confirmed_is_strict() {
        // Lowercase "true" is malformed, not a False fallback.
        let line = JANE.replace("|True|", "|true|");
        let err = parse_line(&line, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 1: invalid confirmed 'true': expected True or False"
        );
    }

    #[test]
    fn test_empty_created_field_is_malformed() {
        let line = JANE.replace("2025-04-01 10:00:00", "");
        let err = parse_line(&line, 3).unwrap_err();
        assert!(err.to_string().contains("invalid created"));
    }
}
