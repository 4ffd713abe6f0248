//! Domain models shared by the funnel client and the BFF

mod booking;
mod contact;
mod draft;
mod room_type;

pub use booking::{Booking, BookingCreate, BookingStatus, BookingUpdate};
pub use contact::ContactMessage;
pub use draft::{BookingDraft, DraftPatch, GuestContact};
pub use room_type::{AvailabilityQuery, RoomType};
