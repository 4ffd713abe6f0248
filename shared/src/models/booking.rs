//! Booking payloads exchanged with the backend service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar;

/// Booking lifecycle status, assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Create-booking payload — the finalized snapshot of a draft
/// (the "booking submission") sent to the backend at confirmation time.
///
/// No further mutation once sent; the backend is the authority on
/// acceptance and reference-number assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    /// Check-in calendar day
    #[serde(rename = "checkin")]
    pub check_in: NaiveDate,
    /// Check-out calendar day, strictly after check-in
    #[serde(rename = "checkout")]
    pub check_out: NaiveDate,
    /// Number of guests (>= 1)
    pub adults: u32,
    /// Room type identifier
    pub room_type: String,
    /// Nightly price, informational
    #[serde(rename = "price", skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<Decimal>,
    /// Computed total (nights * price per night)
    pub total_amount: Decimal,
    /// ISO currency code
    pub currency: String,
    /// Full guest name
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    /// Origin tag, always "WEB" for the funnel
    pub source: String,
}

/// Update-booking payload — every field optional, only supplied fields
/// are forwarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingUpdate {
    #[serde(rename = "checkin", skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(rename = "checkout", skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

/// A booking as returned by the backend, normalized for the funnel.
///
/// The backend uses `checkin`/`checkout`; older responses used
/// `checkInDate`/`checkOutDate`. Aliases accept both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    pub id: Option<serde_json::Value>,
    pub booking_reference: Option<String>,
    #[serde(rename = "checkin", alias = "checkInDate")]
    pub check_in: Option<NaiveDate>,
    #[serde(rename = "checkout", alias = "checkOutDate")]
    pub check_out: Option<NaiveDate>,
    pub adults: Option<u32>,
    pub room_type: Option<String>,
    pub guest_name: Option<String>,
    pub guest_email: Option<String>,
    pub total_amount: Option<Decimal>,
    pub currency: Option<String>,
    pub status: Option<BookingStatus>,
}

impl Booking {
    /// The reference shown to the guest: the backend-assigned reference
    /// number when present, otherwise the raw id.
    pub fn reference(&self) -> Option<String> {
        if let Some(r) = &self.booking_reference {
            return Some(r.clone());
        }
        match &self.id {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Derived night count when both dates are present and ordered.
    pub fn number_of_nights(&self) -> Option<u32> {
        calendar::nights_between(self.check_in?, self.check_out?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let status: BookingStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_booking_accepts_both_date_key_styles() {
        let modern: Booking =
            serde_json::from_str(r#"{"checkin":"2024-05-01","checkout":"2024-05-04"}"#).unwrap();
        let legacy: Booking =
            serde_json::from_str(r#"{"checkInDate":"2024-05-01","checkOutDate":"2024-05-04"}"#)
                .unwrap();
        assert_eq!(modern.check_in, legacy.check_in);
        assert_eq!(modern.number_of_nights(), Some(3));
    }

    #[test]
    fn test_reference_prefers_backend_reference() {
        let booking: Booking =
            serde_json::from_str(r#"{"id":42,"bookingReference":"HB-2024-0042"}"#).unwrap();
        assert_eq!(booking.reference().as_deref(), Some("HB-2024-0042"));

        let bare: Booking = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(bare.reference().as_deref(), Some("42"));
    }
}
