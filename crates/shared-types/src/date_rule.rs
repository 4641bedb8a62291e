//! Date normalization tied to the "unknown year" flag.
//!
//! While the flag is set, the stored date carries [`SENTINEL_YEAR`] instead of
//! a real year. Overwriting is one-way: clearing the flag later does not bring
//! the original year back.

use chrono::{Datelike, NaiveDate};

use crate::error::{EntryError, EntryResult};

/// Placeholder year for dates whose real year is unknown
pub const SENTINEL_YEAR: i32 = 1900;

/// Storage and wire format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date input value. Empty input means "no date yet".
pub fn parse_entry_date(raw: &str) -> EntryResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|e| EntryError::InvalidDate(format!("{}: {}", raw, e)))
}

pub fn format_entry_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Replace the year with [`SENTINEL_YEAR`], keeping month and day.
pub fn force_sentinel_year(date: NaiveDate) -> NaiveDate {
    date.with_year(SENTINEL_YEAR).unwrap_or_else(|| {
        // 1900 is not a leap year; February 29 overflows into March.
        NaiveDate::from_ymd_opt(SENTINEL_YEAR, 3, 1).unwrap_or(date)
    })
}

pub fn normalize_date(date: NaiveDate, unknown_year: bool) -> NaiveDate {
    if unknown_year {
        force_sentinel_year(date)
    } else {
        date
    }
}

/// Parse, normalize and re-serialize a raw date input value.
///
/// Returns an empty string for empty input.
pub fn normalize_date_input(raw: &str, unknown_year: bool) -> EntryResult<String> {
    Ok(parse_entry_date(raw)?
        .map(|date| format_entry_date(normalize_date(date, unknown_year)))
        .unwrap_or_default())
}
