//! Booking draft — the in-progress, unsubmitted booking state
//!
//! The draft is exclusively owned by the browser session and persisted in
//! browser-local storage between funnel pages. The BFF and the backend
//! never read or write it; they only receive a finalized
//! [`BookingCreate`](super::BookingCreate) at confirmation time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar;

/// The in-progress booking state, populated incrementally across the
/// search → room-selection → guest-details → confirmation flow.
///
/// Every field is optional: the draft starts empty on the first visit to
/// the search page and fills in as the user navigates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    /// Check-in calendar day
    pub check_in_date: Option<NaiveDate>,
    /// Check-out calendar day (strictly after check-in when both present)
    pub check_out_date: Option<NaiveDate>,
    /// Number of guests (>= 1 when present)
    pub guest_count: Option<u32>,
    /// Identifier of the selected room type, absent until a room is chosen
    pub room_type_id: Option<String>,
    /// Display name of the selected room type
    pub room_type_name: Option<String>,
    /// Nightly price of the selected room type
    pub price_per_night: Option<Decimal>,
}

impl BookingDraft {
    /// The (check-in, check-out) pair when both dates are present and
    /// correctly ordered, `None` otherwise.
    pub fn stay(&self) -> Option<(NaiveDate, NaiveDate)> {
        let check_in = self.check_in_date?;
        let check_out = self.check_out_date?;
        calendar::nights_between(check_in, check_out)?;
        Some((check_in, check_out))
    }

    /// Nights for the stay, falling back to [`calendar::MIN_NIGHTS`] when
    /// dates are absent or unordered.
    pub fn nights(&self) -> u32 {
        self.stay()
            .and_then(|(a, b)| calendar::nights_between(a, b))
            .unwrap_or(calendar::MIN_NIGHTS)
    }

    /// Apply a partial update, returning the merged draft.
    ///
    /// Fields present in the patch win; fields absent from the patch are
    /// preserved from `self`.
    pub fn merged(&self, patch: &DraftPatch) -> BookingDraft {
        BookingDraft {
            check_in_date: patch.check_in_date.or(self.check_in_date),
            check_out_date: patch.check_out_date.or(self.check_out_date),
            guest_count: patch.guest_count.or(self.guest_count),
            room_type_id: patch
                .room_type_id
                .clone()
                .or_else(|| self.room_type_id.clone()),
            room_type_name: patch
                .room_type_name
                .clone()
                .or_else(|| self.room_type_name.clone()),
            price_per_night: patch.price_per_night.or(self.price_per_night),
        }
    }
}

/// Partial update for [`BookingDraft`] — only supplied fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftPatch {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub guest_count: Option<u32>,
    pub room_type_id: Option<String>,
    pub room_type_name: Option<String>,
    pub price_per_night: Option<Decimal>,
}

impl DraftPatch {
    /// Patch carrying only the stay fields (dates + guest count).
    pub fn stay(check_in: NaiveDate, check_out: NaiveDate, guests: u32) -> Self {
        Self {
            check_in_date: Some(check_in),
            check_out_date: Some(check_out),
            guest_count: Some(guests),
            ..Self::default()
        }
    }
}

/// Guest contact details collected on the guest-details page, stored as a
/// separate blob from the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub special_requests: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        calendar::parse_day(s).unwrap()
    }

    #[test]
    fn test_empty_draft_has_no_stay() {
        let draft = BookingDraft::default();
        assert_eq!(draft.stay(), None);
        assert_eq!(draft.nights(), calendar::MIN_NIGHTS);
    }

    #[test]
    fn test_stay_requires_ordering() {
        let draft = BookingDraft {
            check_in_date: Some(day("2024-05-03")),
            check_out_date: Some(day("2024-05-01")),
            ..BookingDraft::default()
        };
        assert_eq!(draft.stay(), None);
    }

    #[test]
    fn test_merged_preserves_unsupplied_fields() {
        let draft = BookingDraft {
            check_in_date: Some(day("2024-05-01")),
            check_out_date: Some(day("2024-05-04")),
            guest_count: Some(2),
            ..BookingDraft::default()
        };
        let merged = draft.merged(&DraftPatch {
            guest_count: Some(3),
            ..DraftPatch::default()
        });
        assert_eq!(merged.guest_count, Some(3));
        assert_eq!(merged.check_in_date, Some(day("2024-05-01")));
        assert_eq!(merged.check_out_date, Some(day("2024-05-04")));
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = BookingDraft {
            check_in_date: Some(day("2024-05-01")),
            ..BookingDraft::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["checkInDate"], "2024-05-01");
    }
}
