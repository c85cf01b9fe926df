//! Time utilities: parsing "HH:MM" labels, formatting hours and parsing
//! back-fill timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

/// Minutes since midnight for a `"HH:MM"` label.
///
/// Ranges are not validated: `"25:99"` gives 1599. A blank hour or minute
/// part counts as 0 (`"08:"` gives 480). Empty input, a label without `:`,
/// a non-numeric part or a value too large for `i64` yields `None`, and the
/// caller treats it like a missing punch. Anything after the minutes
/// (`"09:30:15"`) is ignored.
pub fn time_to_minutes(label: Option<&str>) -> Option<i64> {
    let label = label?;
    if label.is_empty() {
        return None;
    }

    let mut parts = label.split(':');
    let hours = parse_part(parts.next()?)?;
    let minutes = parse_part(parts.next()?)?;

    hours.checked_mul(60)?.checked_add(minutes)
}

fn parse_part(part: &str) -> Option<i64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0);
    }
    part.parse().ok()
}

/// Hours with exactly two decimals ("7.25", "-1.50").
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// Parse a local "YYYY-MM-DD HH:MM" timestamp, used to back-fill punches.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidDateTime(format!("'{s}' (expected YYYY-MM-DD HH:MM)")))?;

    naive
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| AppError::InvalidDateTime(format!("'{s}' is ambiguous in local time")))
}
