//! Shared server state

use std::sync::Arc;

use serde_json::Value;
use shared::error::AppError;

use crate::backend::BackendClient;

use super::Config;

/// State shared by all request handlers.
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub backend: BackendClient,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let backend = BackendClient::new(&config);
        Self {
            config: Arc::new(config),
            backend,
        }
    }

    /// Translate a non-2xx backend answer into the error envelope.
    ///
    /// Client-class statuses map onto their local equivalents so the
    /// browser sees the same shape whether the BFF or the backend
    /// rejected the request. Server-class statuses become a 502. The raw
    /// upstream body is attached as a detail outside production.
    pub fn translate_rejection(&self, status: u16, body: Value) -> AppError {
        let upstream_message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut err = match status {
            404 => AppError::new(shared::error::ErrorCode::BookingNotFound),
            409 => AppError::new(shared::error::ErrorCode::AlreadyExists),
            422 => AppError::new(shared::error::ErrorCode::ValidationFailed),
            400 => AppError::new(shared::error::ErrorCode::InvalidRequest),
            _ => AppError::new(shared::error::ErrorCode::UpstreamRejected),
        };

        if let Some(message) = upstream_message {
            err.message = message;
        }
        if !self.config.is_production() {
            err = err
                .with_detail("upstreamStatus", status)
                .with_detail("upstream", body);
        }
        err
    }
}
