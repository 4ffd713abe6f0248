//! booking-server — backend-for-frontend for the hotel booking funnel
//!
//! Sits between the browser and the backend booking service:
//! - Validates booking payloads before anything reaches the backend
//! - Forwards CRUD operations and relays backend answers verbatim
//! - Translates backend failures into the unified error envelope

pub mod api;
pub mod backend;
pub mod core;
pub mod utils;
