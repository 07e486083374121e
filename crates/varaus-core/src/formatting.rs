use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format a euro amount with two decimal places and a comma decimal
/// separator, the way the reservation exports are displayed.
///
/// # Examples
///
/// ```
/// use varaus_core::formatting::format_euros;
///
/// assert_eq!(format_euros(60.0),   "60,00 €");
/// assert_eq!(format_euros(12.5),   "12,50 €");
/// assert_eq!(format_euros(0.0),    "0,00 €");
/// assert_eq!(format_euros(1.005),  "1,01 €");
/// ```
pub fn format_euros(amount: f64) -> String {
    // Handle the sign separately so rounding works on the absolute value.
    let negative = amount < 0.0;
    let abs_value = amount.abs();

    // Round to two decimal places.
    // Add a tiny epsilon (half ULP at the target precision) before rounding
    // to avoid IEEE 754 binary-representation issues at exact midpoints.
    let epsilon = f64::EPSILON * abs_value * 100.0;
    let rounded = ((abs_value * 100.0) + epsilon).round() / 100.0;

    let formatted = format!("{:.2}", rounded).replace('.', ",");
    if negative {
        format!("-{} €", formatted)
    } else {
        format!("{} €", formatted)
    }
}

/// Format a date as `DD.MM.YYYY`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use varaus_core::formatting::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
/// assert_eq!(format_date(date), "01.05.2025");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a clock time as `HH.MM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use varaus_core::formatting::format_clock;
///
/// let time = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
/// assert_eq!(format_clock(time), "14.00");
/// ```
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H.%M").to_string()
}

/// Format a full timestamp as `DD.MM.YYYY HH.MM.SS`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use varaus_core::formatting::format_timestamp;
///
/// let ts = NaiveDate::from_ymd_opt(2025, 4, 1)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// assert_eq!(format_timestamp(ts), "01.04.2025 10.00.00");
/// ```
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%d.%m.%Y %H.%M.%S").to_string()
}

// ── Tests ──────────────────────────────────────────────────────────────────────
