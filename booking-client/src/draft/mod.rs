//! Booking draft persistence and reconciliation
//!
//! The draft lives in two JSON blobs behind the [`DraftStorage`] seam
//! (browser-local storage in the funnel, [`MemoryStorage`] in tests and
//! native hosts): the draft itself under `bookingDetails` and the guest
//! contact details under `guestDetails`.

mod reconcile;
mod store;
mod submission;

pub use reconcile::{NavigationQuery, ResolvedStay, StayDefaults, reconcile};
pub use store::{CONTACT_KEY, DRAFT_KEY, DraftStorage, DraftStore, MemoryStorage};
pub use submission::build_submission;
