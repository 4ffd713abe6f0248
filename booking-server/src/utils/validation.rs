//! Booking input validation
//!
//! Every booking payload is validated here before anything is forwarded
//! to the backend, so malformed submissions never leave the BFF. Failures
//! are collected per field and returned together in one 400 response.

use chrono::NaiveDate;
use validator::ValidateEmail;

use shared::calendar;
use shared::models::{BookingCreate, BookingUpdate, ContactMessage};

use super::FieldError;

// ── Text length limits ──────────────────────────────────────────────

/// Guest names (full name as entered in the funnel)
pub const MIN_GUEST_NAME_LEN: usize = 2;
pub const MAX_GUEST_NAME_LEN: usize = 100;

/// Phone numbers, digits only after stripping separators
pub const MIN_PHONE_DIGITS: usize = 6;
pub const MAX_PHONE_LEN: usize = 30;

/// Free-text fields: special requests, contact messages
pub const MAX_TEXT_LEN: usize = 2000;

/// Contact form subject
pub const MAX_SUBJECT_LEN: usize = 200;

// ── Field checks ────────────────────────────────────────────────────

fn check_guest_name(name: &str, errors: &mut Vec<FieldError>) {
    let trimmed = name.trim();
    if trimmed.chars().count() < MIN_GUEST_NAME_LEN {
        errors.push(FieldError::new(
            "guestName",
            format!("Guest name must be at least {MIN_GUEST_NAME_LEN} characters"),
        ));
        return;
    }
    if trimmed.chars().count() > MAX_GUEST_NAME_LEN {
        errors.push(FieldError::new(
            "guestName",
            format!("Guest name must be at most {MAX_GUEST_NAME_LEN} characters"),
        ));
        return;
    }
    let valid = trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '\'' || c == '-' || c == '.');
    if !valid {
        errors.push(FieldError::new(
            "guestName",
            "Guest name may only contain letters, spaces, apostrophes and hyphens",
        ));
    }
}

fn check_guest_email(email: &str, errors: &mut Vec<FieldError>) {
    if !email.trim().validate_email() {
        errors.push(FieldError::new("guestEmail", "A valid email address is required"));
    }
}

fn check_guest_phone(phone: &str, errors: &mut Vec<FieldError>) {
    let trimmed = phone.trim();
    if trimmed.len() > MAX_PHONE_LEN {
        errors.push(FieldError::new("guestPhone", "Phone number is too long"));
        return;
    }
    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-' || c == '(' || c == ')');
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if !valid_chars || digits < MIN_PHONE_DIGITS {
        errors.push(FieldError::new(
            "guestPhone",
            format!("A valid phone number with at least {MIN_PHONE_DIGITS} digits is required"),
        ));
    }
}

fn check_date_order(check_in: NaiveDate, check_out: NaiveDate, errors: &mut Vec<FieldError>) {
    if calendar::nights_between(check_in, check_out).is_none() {
        errors.push(FieldError::new(
            "checkout",
            "Check-out date must be after check-in date",
        ));
    }
}

// ── Payload validation ──────────────────────────────────────────────

/// Validate a create-booking payload. An empty result means the payload
/// may be forwarded.
pub fn validate_create(payload: &BookingCreate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if payload.check_in < calendar::today() {
        errors.push(FieldError::new(
            "checkin",
            "Check-in date cannot be in the past",
        ));
    }
    check_date_order(payload.check_in, payload.check_out, &mut errors);

    if payload.adults < 1 {
        errors.push(FieldError::new("adults", "At least one guest is required"));
    }
    if payload.room_type.trim().is_empty() {
        errors.push(FieldError::new("roomType", "A room type is required"));
    }
    if payload.total_amount.is_sign_negative() {
        errors.push(FieldError::new(
            "totalAmount",
            "Total amount cannot be negative",
        ));
    }

    check_guest_name(&payload.guest_name, &mut errors);
    check_guest_email(&payload.guest_email, &mut errors);
    check_guest_phone(&payload.guest_phone, &mut errors);

    if let Some(requests) = &payload.special_requests
        && requests.len() > MAX_TEXT_LEN
    {
        errors.push(FieldError::new("specialRequests", "Special requests text is too long"));
    }

    errors
}

/// Validate an update payload. Only supplied fields are checked; past
/// check-in dates are allowed on updates of existing stays.
pub fn validate_update(payload: &BookingUpdate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let (Some(check_in), Some(check_out)) = (payload.check_in, payload.check_out) {
        check_date_order(check_in, check_out, &mut errors);
    }
    if let Some(adults) = payload.adults
        && adults < 1
    {
        errors.push(FieldError::new("adults", "At least one guest is required"));
    }
    if let Some(name) = &payload.guest_name {
        check_guest_name(name, &mut errors);
    }
    if let Some(email) = &payload.guest_email {
        check_guest_email(email, &mut errors);
    }
    if let Some(phone) = &payload.guest_phone {
        check_guest_phone(phone, &mut errors);
    }

    errors
}

/// Validate a contact-form message.
pub fn validate_contact(payload: &ContactMessage) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if payload.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    check_guest_email_as(&payload.email, "email", &mut errors);
    if let Some(subject) = &payload.subject
        && (subject.trim().is_empty() || subject.len() > MAX_SUBJECT_LEN)
    {
        errors.push(FieldError::new("subject", "Subject must not be blank"));
    }
    if payload.message.trim().is_empty() || payload.message.len() > MAX_TEXT_LEN {
        errors.push(FieldError::new("message", "A message is required"));
    }

    errors
}

fn check_guest_email_as(email: &str, field: &str, errors: &mut Vec<FieldError>) {
    if !email.trim().validate_email() {
        errors.push(FieldError::new(field, "A valid email address is required"));
    }
}
