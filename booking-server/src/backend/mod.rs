//! HTTP client for the backend booking service
//!
//! The BFF never interprets successful backend answers: a 2xx body is
//! relayed to the browser verbatim. Transport failures are classified
//! here so the API layer can answer 503 (retryable) versus 502.

use std::time::Duration;

use http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use shared::error::AppError;

use crate::core::Config;

/// Transport-level failure talking to the backend. Non-2xx answers are
/// not errors at this layer; they come back as a [`Relay`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection refused, DNS failure, TLS failure
    #[error("backend unreachable: {0}")]
    Unavailable(String),

    /// The backend did not answer within the configured timeout
    #[error("backend timed out")]
    Timeout,

    /// The backend answered with a body that is not JSON
    #[error("backend returned a non-JSON body: {0}")]
    InvalidResponse(String),
}

impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable(detail) => {
                tracing::error!(%detail, "backend unreachable");
                AppError::upstream_unavailable()
            }
            BackendError::Timeout => AppError::upstream_timeout(),
            BackendError::InvalidResponse(detail) => {
                tracing::error!(%detail, "unparseable backend response");
                AppError::new(shared::error::ErrorCode::UpstreamInvalidResponse)
            }
        }
    }
}

/// A backend answer: status plus parsed JSON body.
#[derive(Debug, Clone)]
pub struct Relay {
    pub status: StatusCode,
    pub body: Value,
}

impl Relay {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Thin reqwest wrapper around the backend base URL.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.backend_timeout_ms))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.backend_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Relay, BackendError> {
        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();

        // 204 and other empty answers relay as JSON null
        let raw = response.bytes().await.map_err(classify_transport)?;
        let body = if raw.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&raw)
                .map_err(|e| BackendError::InvalidResponse(e.to_string()))?
        };

        Ok(Relay { status, body })
    }

    pub async fn get(&self, path: &str) -> Result<Relay, BackendError> {
        self.execute(self.http.get(self.url(path))).await
    }

    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Relay, BackendError> {
        self.execute(self.http.get(self.url(path)).query(query))
            .await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Relay, BackendError> {
        self.execute(self.http.post(self.url(path)).json(body))
            .await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Relay, BackendError> {
        self.execute(self.http.put(self.url(path)).json(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Relay, BackendError> {
        self.execute(self.http.delete(self.url(path))).await
    }
}

fn classify_transport(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Unavailable(err.to_string())
    }
}
