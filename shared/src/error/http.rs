//! HTTP status code mapping and axum response conversion

use super::types::{ApiResponse, AppError};
use http::StatusCode;

use super::codes::ErrorCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::BookingNotFound | Self::RoomTypeNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict
            Self::AlreadyExists => StatusCode::CONFLICT,

            // 503 Service Unavailable (transient, the client can retry)
            Self::UpstreamUnavailable | Self::UpstreamTimeout => StatusCode::SERVICE_UNAVAILABLE,

            // 502 Bad Gateway (backend answered, but with a failure we
            // could not map to a client-facing status)
            Self::UpstreamRejected | Self::UpstreamInvalidResponse => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);
        (status, axum::Json(body)).into_response()
    }
}
