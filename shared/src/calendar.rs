//! Calendar-day helpers.
//!
//! A "calendar day" is a timezone-independent (year, month, day) value,
//! always exchanged as a `YYYY-MM-DD` string. Parsing and formatting never
//! apply a timezone shift; the only place a timezone enters is [`today`],
//! which resolves the current day in the property's local timezone so that
//! availability windows look the same for every caller.

use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;

/// The property's local timezone (UTC+1, no DST).
pub const HOTEL_TZ: Tz = chrono_tz::Africa::Ndjamena;

/// Minimum billable stay, also the uniform fallback when dates are
/// absent or unordered.
pub const MIN_NIGHTS: u32 = 1;

/// Parse a strict `YYYY-MM-DD` string into a calendar day.
///
/// Returns `None` for anything malformed (wrong length, missing zero
/// padding, impossible dates). Callers must handle absence explicitly.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Render a calendar day back to `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Human display form, e.g. `Mon, Mar 4, 2024`.
pub fn format_nice(day: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        day.format("%a"),
        day.format("%b"),
        day.day(),
        day.year()
    )
}

/// Number of nights between two days.
///
/// Defined only for `check_out` strictly after `check_in`; anything else
/// is `None` and callers fall back to [`MIN_NIGHTS`].
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Option<u32> {
    let diff = (check_out - check_in).num_days();
    if diff > 0 { Some(diff as u32) } else { None }
}

/// Today as a calendar day in the property's timezone, regardless of the
/// host's own timezone.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&HOTEL_TZ).date_naive()
}

/// The calendar day `n` days later, with month/year rollover.
///
/// `None` only on overflow past the representable date range.
pub fn add_days(day: NaiveDate, n: u64) -> Option<NaiveDate> {
    day.checked_add_days(Days::new(n))
}
