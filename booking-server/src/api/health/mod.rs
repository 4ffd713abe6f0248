//! Health check routes
//!
//! `/health` answers without touching the backend; `/health/detailed`
//! probes the backend connection and reports per-component status.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Health routes - public, no validation
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (ok | error)
    status: &'static str,
    version: &'static str,
    environment: String,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// Uptime in seconds
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    backend: CheckResult,
}

#[derive(Serialize)]
pub struct CheckResult {
    /// Status (ok | error)
    status: &'static str,
    latency_ms: Option<u64>,
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

// Server start time (lazily initialized)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    })
}

/// Detailed health check including a backend probe
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let probe_start = std::time::Instant::now();
    let backend_check = match state.backend.get("/api/rooms").await {
        Ok(relay) if relay.is_success() => {
            CheckResult::ok_with_latency(probe_start.elapsed().as_millis() as u64)
        }
        Ok(relay) => CheckResult::error(format!("Backend answered {}", relay.status)),
        Err(e) => CheckResult::error(e.to_string()),
    };

    let all_ok = backend_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        checks: HealthChecks {
            backend: backend_check,
        },
    })
}
