//! Timestamp cleanup and parsing for attendance exports.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Excel day 0 (serial dates count days from here, 1900 leap-year bug included)
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Largest serial Excel accepts (9999-12-31)
const EXCEL_MAX_SERIAL: f64 = 2_958_465.999_99;

const DATETIME_FORMATS: [&str; 10] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d.%m.%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Remove the `="…"` wrapper spreadsheet exports put around timestamps.
///
/// Every `="` is dropped first, then every remaining `"`, so
/// `="2021-01-01 10:00:00"` becomes `2021-01-01 10:00:00` and text without
/// the wrapper is returned unchanged.
pub fn strip_export_quoting(raw: &str) -> String {
    raw.replace("=\"", "").replace('"', "")
}

/// Parse a cleaned timestamp. Offsets (RFC 3339) are dropped and the wall-clock
/// time kept; plain numbers are read as Excel serial dates.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATETIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }

    s.parse::<f64>().ok().and_then(excel_serial_to_datetime)
}

/// Strip the export wrapper, then parse.
pub fn clean_timestamp(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(&strip_export_quoting(raw))
}

/// Convert an Excel serial (days since 1899-12-30, fraction = time of day)
/// to a timestamp, rounded to the millisecond.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return None;
    }

    let (y, m, d) = EXCEL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
    let millis = (serial * 86_400_000.0).round() as i64;

    epoch.checked_add_signed(Duration::milliseconds(millis))
}
