//! Availability search API module
//!
//! The date parameters arrive as raw strings so a malformed date can be
//! answered with a field-level 400 instead of a generic rejection.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use shared::calendar;
use shared::models::AvailabilityQuery;

use crate::api::relay_response;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, FieldError};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/availability", get(search))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAvailabilityQuery {
    check_in: Option<String>,
    check_out: Option<String>,
    guests: Option<String>,
}

impl RawAvailabilityQuery {
    fn parse(self) -> Result<AvailabilityQuery, Vec<FieldError>> {
        let mut errors = Vec::new();

        let check_in = self.check_in.as_deref().and_then(calendar::parse_day);
        if check_in.is_none() {
            errors.push(FieldError::new(
                "checkIn",
                "A check-in date in YYYY-MM-DD format is required",
            ));
        }
        let check_out = self.check_out.as_deref().and_then(calendar::parse_day);
        if check_out.is_none() {
            errors.push(FieldError::new(
                "checkOut",
                "A check-out date in YYYY-MM-DD format is required",
            ));
        }
        let guests = match self.guests.as_deref() {
            None => Some(1),
            Some(raw) => {
                let parsed = raw.parse::<u32>().ok().filter(|&g| g >= 1);
                if parsed.is_none() {
                    errors.push(FieldError::new("guests", "At least one guest is required"));
                }
                parsed
            }
        };

        if let (Some(check_in), Some(check_out)) = (check_in, check_out)
            && calendar::nights_between(check_in, check_out).is_none()
        {
            errors.push(FieldError::new(
                "checkOut",
                "Check-out date must be after check-in date",
            ));
        }

        match (check_in, check_out, guests) {
            (Some(check_in), Some(check_out), Some(guests)) if errors.is_empty() => {
                Ok(AvailabilityQuery {
                    check_in,
                    check_out,
                    guests,
                })
            }
            _ => Err(errors),
        }
    }
}

/// GET /api/availability - search available rooms for a stay
async fn search(
    State(state): State<ServerState>,
    Query(raw): Query<RawAvailabilityQuery>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let query = raw.parse().map_err(AppError::validation_fields)?;

    relay_response(
        &state,
        state
            .backend
            .get_with_query(
                "/api/availability",
                &[
                    ("checkIn", query.check_in.to_string()),
                    ("checkOut", query.check_out.to_string()),
                    ("guests", query.guests.to_string()),
                ],
            )
            .await,
    )
}
