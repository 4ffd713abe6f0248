//! Booking summary projection
//!
//! Pure mapping from a [`BookingDraft`] to the display strings the
//! summary panel shows on every funnel page. No network calls, no
//! storage writes; anything missing renders as the `N/A` placeholder
//! instead of failing the page.

use rust_decimal::Decimal;
use shared::calendar;
use shared::models::BookingDraft;

/// Placeholder for absent fields.
pub const PLACEHOLDER: &str = "N/A";

/// Display strings derived from the current draft.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub nights: String,
    pub price_per_night: String,
    pub total: String,
}

impl BookingSummary {
    /// Project a draft into display strings.
    pub fn project(draft: &BookingDraft) -> Self {
        let nights = draft.nights();
        let total = draft
            .price_per_night
            .map(|price| price * Decimal::from(nights));

        Self {
            room_type: draft
                .room_type_name
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.into()),
            check_in: draft
                .check_in_date
                .map(calendar::format_nice)
                .unwrap_or_else(|| PLACEHOLDER.into()),
            check_out: draft
                .check_out_date
                .map(calendar::format_nice)
                .unwrap_or_else(|| PLACEHOLDER.into()),
            guests: draft
                .guest_count
                .map(|g| g.to_string())
                .unwrap_or_else(|| "1".into()),
            nights: nights.to_string(),
            price_per_night: draft
                .price_per_night
                .map(format_fcfa)
                .unwrap_or_else(|| PLACEHOLDER.into()),
            total: total.map(format_fcfa).unwrap_or_else(|| PLACEHOLDER.into()),
        }
    }
}

/// Format an amount in the non-decimal FCFA style with space grouping:
/// `12 000 FCFA`.
pub fn format_fcfa(amount: Decimal) -> String {
    let rounded = amount.round();
    let raw = rounded.abs().to_string();
    let digits = raw.trim_start_matches('-');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped} FCFA")
}
