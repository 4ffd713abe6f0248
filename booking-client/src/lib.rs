//! Booking funnel client — draft state and BFF API access
//!
//! Everything the multi-step booking funnel (search → room selection →
//! guest details → confirmation) needs on the browser side of the wire:
//!
//! - [`draft`]: the persisted booking draft, partial-merge store and the
//!   URL-query / stored-draft / server-default reconciliation
//! - [`summary`]: pure projection from a draft to display strings
//! - [`http`]: HTTP calls to the BFF, including the bounded-retry
//!   confirmation submission

pub mod config;
pub mod draft;
pub mod error;
pub mod http;
pub mod summary;

pub use config::ClientConfig;
pub use draft::{
    DraftStorage, DraftStore, MemoryStorage, NavigationQuery, ResolvedStay, StayDefaults,
    build_submission, reconcile,
};
pub use error::{ClientError, ClientResult};
pub use http::BookingApi;
pub use summary::{BookingSummary, format_fcfa};

// Re-export shared types for convenience
pub use shared::models::{Booking, BookingCreate, BookingDraft, DraftPatch, GuestContact};
