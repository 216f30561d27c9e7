//! Date-boundary helpers -- parsing, weekday indexing, range iteration.
//!
//! Everything date-shaped enters the engine through [`parse_date`], and every
//! weekday index is produced by [`monday_index`]. Centralizing both keeps the
//! Monday-based storage convention from drifting out of sync with chrono's
//! native weekday type anywhere else in the crate.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc, Weekday};

use crate::error::{AvailabilityError, Result};

/// Parse a caller-supplied date string into a calendar date.
///
/// Accepts, in order of preference:
/// - a plain calendar date: `2024-01-15`
/// - an RFC 3339 datetime: `2024-01-15T09:30:00Z` / `2024-01-15T09:30:00+02:00`,
///   normalized to its **UTC** calendar date (never shifted to a local zone)
/// - a bare datetime without offset: `2024-01-15T09:30:00`, taken as UTC
///
/// # Errors
/// Returns [`AvailabilityError::InvalidDate`] for anything else.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    Err(AvailabilityError::InvalidDate(input.to_string()))
}

/// Convert a chrono weekday to the Monday-based index used by stored
/// weekly patterns: Monday=0 .. Sunday=6.
pub fn monday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_monday() as u8
}

/// Iterate every calendar date from `start` to `end` inclusive, ascending.
///
/// An inverted range (`end < start`) yields nothing -- callers treat it as
/// an empty query, not an error.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
