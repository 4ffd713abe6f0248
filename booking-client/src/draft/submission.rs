//! Draft → submission mapping
//!
//! Builds the finalized [`BookingCreate`] payload from the draft and the
//! guest contact blob at confirmation time. This is the only place the
//! draft crosses over to the BFF/backend side of the wire.

use rust_decimal::Decimal;
use shared::calendar;
use shared::models::{BookingCreate, BookingDraft, BookingStatus, GuestContact};

use crate::error::{ClientError, ClientResult};

/// Currency of every funnel booking.
const CURRENCY: &str = "XAF";

/// Origin tag stamped on funnel submissions.
const SOURCE: &str = "WEB";

fn none_if_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build the booking submission from a complete draft.
///
/// Normalizes the contact fields the way the funnel always has: names
/// trimmed and joined, email lowercased, phone stripped of whitespace.
/// Fails with [`ClientError::Validation`] when the draft is missing a
/// required piece; nothing is sent in that case.
pub fn build_submission(
    draft: &BookingDraft,
    contact: &GuestContact,
) -> ClientResult<BookingCreate> {
    let (check_in, check_out) = draft
        .stay()
        .ok_or_else(|| ClientError::Validation("check-in and check-out dates are required".into()))?;
    let room_type = draft
        .room_type_id
        .clone()
        .ok_or_else(|| ClientError::Validation("no room type selected".into()))?;
    let price_per_night = draft
        .price_per_night
        .ok_or_else(|| ClientError::Validation("selected room has no price".into()))?;

    let guest_name = format!("{} {}", contact.first_name.trim(), contact.last_name.trim());
    if guest_name.trim().is_empty() {
        return Err(ClientError::Validation("guest name is required".into()));
    }
    if contact.email.trim().is_empty() {
        return Err(ClientError::Validation("guest email is required".into()));
    }
    if contact.phone.trim().is_empty() {
        return Err(ClientError::Validation("guest phone is required".into()));
    }

    let nights = calendar::nights_between(check_in, check_out).unwrap_or(calendar::MIN_NIGHTS);

    Ok(BookingCreate {
        check_in,
        check_out,
        adults: draft.guest_count.unwrap_or(1).max(1),
        room_type,
        price_per_night: Some(price_per_night),
        total_amount: price_per_night * Decimal::from(nights),
        currency: CURRENCY.to_string(),
        guest_name: guest_name.trim().to_string(),
        guest_email: contact.email.trim().to_lowercase(),
        guest_phone: contact
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
        address: none_if_blank(&contact.address),
        city: none_if_blank(&contact.city),
        zip_code: none_if_blank(&contact.zip_code),
        country: none_if_blank(&contact.country),
        special_requests: none_if_blank(&contact.special_requests),
        status: BookingStatus::Pending,
        source: SOURCE.to_string(),
    })
}
