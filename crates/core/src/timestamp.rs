//! Timestamp parsing and formatting.
//!
//! The schedule API emits RFC 3339, sometimes without seconds (`2024-01-10T10:00Z`).
//! The record store keeps UTC timestamps as `YYYY-MM-DDTHH:MM:SS` text so that
//! equality on the `Date` column is plain string equality.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{CoreError, Result};

const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DISPLAY_FORMAT: &str = "%B %d, %Y %I:%M %p";

/// Formats accepted once any trailing `Z` has been stripped. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 4] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a timestamp as the schedule API reports it.
///
/// # Errors
/// Returns `CoreError::InvalidTimestamp` if no accepted format matches.
pub fn parse_api_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = trimmed.strip_suffix(['Z', 'z']).unwrap_or(trimmed);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .map(|dt| dt.and_utc())
        .ok_or_else(|| CoreError::InvalidTimestamp {
            value: value.to_owned(),
            reason: "expected an RFC 3339 date-time".to_owned(),
        })
}

/// Render a timestamp for the `Date` column.
#[must_use]
pub fn to_storage(date: &DateTime<Utc>) -> String {
    date.format(STORAGE_FORMAT).to_string()
}

/// Read a timestamp back from the `Date` column.
///
/// # Errors
/// Returns `CoreError::InvalidTimestamp` if the stored text is not a timestamp.
pub fn from_storage(value: &str) -> Result<DateTime<Utc>> {
    parse_api_timestamp(value)
}

/// Human-readable form used in the digest, e.g. `January 10, 2024 10:00 AM`.
#[must_use]
pub fn format_display(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
