//! Booking API handlers
//!
//! Each handler validates what the browser sent, forwards to the backend
//! and relays the answer. The BFF holds no booking state of its own.

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde_json::Value;

use shared::models::{BookingCreate, BookingUpdate};

use crate::api::{BodyJson, relay_response};
use crate::core::ServerState;
use crate::utils::validation::{validate_create, validate_update};
use crate::utils::{AppError, AppResult};

/// GET /api/bookings - list bookings
pub async fn list(State(state): State<ServerState>) -> AppResult<(StatusCode, Json<Value>)> {
    relay_response(&state, state.backend.get("/api/bookings").await)
}

/// GET /api/bookings/:id - fetch one booking
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Value>)> {
    relay_response(&state, state.backend.get(&format!("/api/bookings/{id}")).await)
}

/// POST /api/bookings - create a booking
pub async fn create(
    State(state): State<ServerState>,
    BodyJson(payload): BodyJson<BookingCreate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let errors = validate_create(&payload);
    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "rejected booking payload");
        return Err(AppError::validation_fields(errors));
    }

    tracing::info!(
        room_type = %payload.room_type,
        checkin = %payload.check_in,
        checkout = %payload.check_out,
        "forwarding booking creation"
    );
    relay_response(&state, state.backend.post("/api/bookings", &payload).await)
}

/// PUT /api/bookings/:id - update a booking
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    BodyJson(payload): BodyJson<BookingUpdate>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let errors = validate_update(&payload);
    if !errors.is_empty() {
        return Err(AppError::validation_fields(errors));
    }

    relay_response(
        &state,
        state
            .backend
            .put(&format!("/api/bookings/{id}"), &payload)
            .await,
    )
}

/// DELETE /api/bookings/:id - cancel a booking
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Value>)> {
    tracing::info!(%id, "forwarding booking cancellation");
    relay_response(
        &state,
        state.backend.delete(&format!("/api/bookings/{id}")).await,
    )
}
