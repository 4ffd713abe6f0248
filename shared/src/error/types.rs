//! Error types and API response structures

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A single field-level validation failure, as returned to the browser
/// in a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// The request field that failed validation
    pub field: String,
    /// Human-readable message for that field
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error with structured error code and details
///
/// The primary error type for the booking stack:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field errors, upstream payloads)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a validation error carrying a field-level message list
    pub fn validation_fields(fields: Vec<FieldError>) -> Self {
        let detail = serde_json::to_value(&fields).unwrap_or(Value::Null);
        Self::new(ErrorCode::ValidationFailed).with_detail("fields", detail)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create an upstream unavailable error (connection refused, DNS)
    pub fn upstream_unavailable() -> Self {
        Self::new(ErrorCode::UpstreamUnavailable)
    }

    /// Create an upstream timeout error
    pub fn upstream_timeout() -> Self {
        Self::new(ErrorCode::UpstreamTimeout)
    }

    /// Create an upstream rejection error, keeping the backend detail
    pub fn upstream_rejected(status: u16, body: Value) -> Self {
        Self::new(ErrorCode::UpstreamRejected)
            .with_detail("upstreamStatus", status)
            .with_detail("upstream", body)
    }
}

/// Unified API response structure
///
/// Consistent response format for all BFF endpoints:
/// - `code`: error code (0 for success)
/// - `message`: human-readable message
/// - `data`: response payload (on success)
/// - `details`: additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response without data
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: None,
            details: None,
        }
    }

    /// Create an error response from an [`AppError`]
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_fields_detail() {
        let err = AppError::validation_fields(vec![
            FieldError::new("checkout", "Check-out date must be after check-in date"),
        ]);
        let fields = err.details.as_ref().unwrap().get("fields").unwrap();
        assert_eq!(fields[0]["field"], "checkout");
    }

    #[test]
    fn test_api_response_error_shape() {
        let err = AppError::not_found("Booking 42");
        let resp = ApiResponse::<()>::error(&err);
        assert_eq!(resp.code, Some(ErrorCode::NotFound.code()));
        assert_eq!(resp.message, "Booking 42 not found");
        assert!(resp.details.is_some());
    }

    #[test]
    fn test_upstream_rejected_keeps_detail() {
        let body = serde_json::json!({"error": "Room already booked"});
        let err = AppError::upstream_rejected(409, body.clone());
        let details = err.details.unwrap();
        assert_eq!(details["upstreamStatus"], 409);
        assert_eq!(details["upstream"], body);
    }
}
