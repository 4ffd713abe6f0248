//! Shared types for the booking funnel client and the BFF proxy.
//!
//! Everything that crosses the wire (or the storage seam) lives here:
//!
//! - [`calendar`]: calendar-day parsing, arithmetic and display
//! - [`error`]: unified error codes, [`AppError`] and [`ApiResponse`]
//! - [`models`]: booking draft, submission payloads, room types

pub mod calendar;
pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, FieldError};
pub use models::{
    AvailabilityQuery, Booking, BookingCreate, BookingDraft, BookingStatus, BookingUpdate,
    ContactMessage, DraftPatch, GuestContact, RoomType,
};
