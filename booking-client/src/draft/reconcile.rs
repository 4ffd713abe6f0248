//! Navigation-state reconciliation
//!
//! Each funnel page that can receive navigation state resolves its stay
//! (check-in, check-out, guest count) from three sources, first non-empty
//! wins per field:
//!
//! 1. the incoming URL query (explicit user or link-driven intent),
//! 2. the persisted draft (continuity across navigation),
//! 3. server defaults (today / tomorrow / one guest).
//!
//! The resolved values are written back to the store *before* the result
//! is returned, so date pickers and the summary renderer never see stale
//! state in the same pass. The caller strips the URL query afterwards iff
//! any parameter was present, so stale links are not replayed on refresh.

use chrono::NaiveDate;
use shared::calendar;
use shared::models::DraftPatch;

use super::store::{DraftStorage, DraftStore};

/// Query-parameter aliases accepted for each stay field. Older links use
/// `arrivalDate`/`departureDate`; the funnel itself emits `checkIn`/`checkOut`.
const CHECK_IN_KEYS: [&str; 3] = ["arrivalDate", "checkIn", "checkInDate"];
const CHECK_OUT_KEYS: [&str; 3] = ["departureDate", "checkOut", "checkOutDate"];
const GUESTS_KEYS: [&str; 2] = ["adults", "guests"];

/// Stay fields extracted from an incoming URL query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationQuery {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    /// Whether the query string carried any parameter at all, even
    /// unrelated ones. Drives URL stripping after reconciliation.
    pub had_params: bool,
}

impl NavigationQuery {
    /// Build from decoded key/value pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            query.had_params = true;
            if CHECK_IN_KEYS.contains(&key) && query.check_in.is_none() {
                query.check_in = calendar::parse_day(value);
            } else if CHECK_OUT_KEYS.contains(&key) && query.check_out.is_none() {
                query.check_out = calendar::parse_day(value);
            } else if GUESTS_KEYS.contains(&key) && query.guests.is_none() {
                query.guests = value.parse().ok().filter(|&g| g >= 1);
            }
        }
        query
    }

    /// Build from a raw query string (`checkIn=2024-05-01&adults=2`).
    pub fn from_query_string(raw: &str) -> Self {
        let pairs = raw
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty())
            .filter_map(|p| p.split_once('=').or(Some((p, ""))));
        Self::from_pairs(pairs)
    }
}

/// Server-supplied fallback values.
#[derive(Debug, Clone, PartialEq)]
pub struct StayDefaults {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

impl StayDefaults {
    /// Today / tomorrow / one guest, in the property timezone.
    pub fn from_today() -> Self {
        let today = calendar::today();
        // Overflow is unreachable for any real clock value.
        let tomorrow = calendar::add_days(today, 1).unwrap_or(today);
        Self {
            check_in: today,
            check_out: tomorrow,
            guests: 1,
        }
    }
}

/// The stay a page ends up with after reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    /// True iff the URL query should be stripped (it carried parameters).
    pub strip_query: bool,
}

/// Resolve the stay for a page and persist it.
///
/// The write-back happens before returning so that dependent reads (the
/// summary, the date-picker minimum-date constraint) observe the resolved
/// values within the same pass.
pub fn reconcile<S: DraftStorage>(
    store: &DraftStore<S>,
    query: &NavigationQuery,
    defaults: &StayDefaults,
) -> ResolvedStay {
    let stored = store.load();

    let check_in = query
        .check_in
        .or(stored.check_in_date)
        .unwrap_or(defaults.check_in);
    let mut check_out = query
        .check_out
        .or(stored.check_out_date)
        .unwrap_or(defaults.check_out);
    let guests = query
        .guests
        .or(stored.guest_count)
        .unwrap_or(defaults.guests)
        .max(1);

    // Mixed sources can produce an unordered pair; push check-out to the
    // following day, like the date picker clearing an invalid selection.
    if calendar::nights_between(check_in, check_out).is_none() {
        check_out = calendar::add_days(check_in, 1).unwrap_or(check_in);
    }

    store.save(&DraftPatch::stay(check_in, check_out, guests));

    ResolvedStay {
        check_in,
        check_out,
        guests,
        strip_query: query.had_params,
    }
}
