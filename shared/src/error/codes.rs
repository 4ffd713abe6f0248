//! Unified error codes for the booking stack
//!
//! Error codes are shared by the BFF, the funnel client, and the browser
//! payloads, organized by category:
//! - 0xxx: General errors
//! - 1xxx: Booking errors
//! - 2xxx: Guest input errors
//! - 3xxx: Upstream (backend service) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 1001,
    /// Check-out date is not strictly after check-in
    DateOrderInvalid = 1002,
    /// Check-in date is in the past
    CheckInInPast = 1003,
    /// Guest count below the minimum of one
    GuestCountInvalid = 1004,
    /// Room type not found
    RoomTypeNotFound = 1005,

    // ==================== 2xxx: Guest input ====================
    /// Guest name missing or malformed
    GuestNameInvalid = 2001,
    /// Guest email missing or malformed
    GuestEmailInvalid = 2002,
    /// Guest phone missing or malformed
    GuestPhoneInvalid = 2003,

    // ==================== 3xxx: Upstream ====================
    /// Backend service unreachable (connection refused, DNS failure)
    UpstreamUnavailable = 3001,
    /// Backend service did not answer within the timeout
    UpstreamTimeout = 3002,
    /// Backend service rejected the request
    UpstreamRejected = 3003,
    /// Backend service answered with an unparseable body
    UpstreamInvalidResponse = 3004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",

            Self::BookingNotFound => "Booking not found",
            Self::DateOrderInvalid => "Check-out date must be after check-in date",
            Self::CheckInInPast => "Check-in date cannot be in the past",
            Self::GuestCountInvalid => "At least one guest is required",
            Self::RoomTypeNotFound => "Room type not found",

            Self::GuestNameInvalid => "Guest name is invalid",
            Self::GuestEmailInvalid => "Guest email is invalid",
            Self::GuestPhoneInvalid => "Guest phone is invalid",

            Self::UpstreamUnavailable => "Booking service is currently unavailable",
            Self::UpstreamTimeout => "Booking service did not respond in time",
            Self::UpstreamRejected => "Booking service rejected the request",
            Self::UpstreamInvalidResponse => "Booking service returned an invalid response",

            Self::InternalError => "Internal server error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,

            1001 => Self::BookingNotFound,
            1002 => Self::DateOrderInvalid,
            1003 => Self::CheckInInPast,
            1004 => Self::GuestCountInvalid,
            1005 => Self::RoomTypeNotFound,

            2001 => Self::GuestNameInvalid,
            2002 => Self::GuestEmailInvalid,
            2003 => Self::GuestPhoneInvalid,

            3001 => Self::UpstreamUnavailable,
            3002 => Self::UpstreamTimeout,
            3003 => Self::UpstreamRejected,
            3004 => Self::UpstreamInvalidResponse,

            9001 => Self::InternalError,
            9002 => Self::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::DateOrderInvalid,
            ErrorCode::GuestEmailInvalid,
            ErrorCode::UpstreamUnavailable,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::UpstreamUnavailable.to_string(), "E3001");
    }
}
