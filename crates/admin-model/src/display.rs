//! Display formatting shared by the GUI and CLI renderers.

use chrono::{DateTime, NaiveDateTime, TimeDelta};

/// Hour offset applied to server timestamps before display.
///
/// The admin API reports UTC; the console shows local office time.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 7;

/// Formats a server timestamp as `YYYY-MM-DD hh:mm AM`.
///
/// Accepts RFC 3339 and naive `YYYY-MM-DDTHH:MM:SS[.fff]` values. Anything
/// unparseable, or that the offset would push outside the representable
/// range, is returned unchanged so a bad value never hides a row.
#[must_use]
pub fn format_timestamp(raw: &str, offset_hours: i32) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"));

    parsed
        .ok()
        .zip(TimeDelta::try_hours(i64::from(offset_hours)))
        .and_then(|(naive, offset)| naive.checked_add_signed(offset))
        .map_or_else(
            || raw.to_string(),
            |local| local.format("%Y-%m-%d %I:%M %p").to_string(),
        )
}
