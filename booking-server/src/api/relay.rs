//! Relay helper shared by the proxied routes

use axum::Json;
use http::StatusCode;
use serde_json::Value;

use crate::backend::{BackendError, Relay};
use crate::core::ServerState;
use crate::utils::AppResult;

/// Turn a backend call result into the browser-facing response.
///
/// Successful backend answers pass through verbatim (status and body).
/// Rejections and transport failures become the unified error envelope.
pub fn relay_response(
    state: &ServerState,
    result: Result<Relay, BackendError>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let relay = result?;
    if relay.is_success() {
        return Ok((relay.status, Json(relay.body)));
    }
    Err(state.translate_rejection(relay.status.as_u16(), relay.body))
}
