//! Room type API module

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::Value;

use crate::api::relay_response;
use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rooms", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(list))
        .route("/{id}", get(get_by_id))
}

/// GET /api/rooms - room type catalogue
async fn list(State(state): State<ServerState>) -> AppResult<(StatusCode, Json<Value>)> {
    relay_response(&state, state.backend.get("/api/rooms").await)
}

/// GET /api/rooms/:id - one room type
async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Value>)> {
    relay_response(&state, state.backend.get(&format!("/api/rooms/{id}")).await)
}
