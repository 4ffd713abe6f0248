//! Contact form API module

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::Value;

use shared::models::ContactMessage;

use crate::api::{BodyJson, relay_response};
use crate::core::ServerState;
use crate::utils::validation::validate_contact;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/contact", post(send))
}

/// POST /api/contact - forward a contact-form message
async fn send(
    State(state): State<ServerState>,
    BodyJson(payload): BodyJson<ContactMessage>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let errors = validate_contact(&payload);
    if !errors.is_empty() {
        return Err(AppError::validation_fields(errors));
    }

    relay_response(&state, state.backend.post("/api/contact", &payload).await)
}
