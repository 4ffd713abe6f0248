//! HTTP access to the BFF
//!
//! Thin reqwest wrapper plus the confirmation submission: one outstanding
//! call at a time, bounded retries with an increasing delay. A retry after
//! a network-ambiguous failure can duplicate a submission; that tradeoff
//! is accepted, the backend reference number is the source of truth.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::models::{AvailabilityQuery, Booking, BookingCreate, RoomType};

use crate::config::ClientConfig;
use crate::draft::{DraftStorage, DraftStore, build_submission};
use crate::error::{ClientError, ClientResult};

/// Error envelope returned by the BFF on failure paths.
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the BFF API.
#[derive(Debug, Clone)]
pub struct BookingApi {
    http: Client,
    base_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl BookingApi {
    /// Create a client from a [`ClientConfig`].
    pub fn new(config: &ClientConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries.max(1),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ClientError::InvalidResponse(e.to_string()));
        }

        let message = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope
                .message
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").into()),
            Err(_) => status.canonical_reason().unwrap_or("request failed").into(),
        };
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// GET /api/rooms
    pub async fn list_room_types(&self) -> ClientResult<Vec<RoomType>> {
        let response = self.http.get(self.url("/api/rooms")).send().await?;
        self.handle_response(response).await
    }

    /// GET /api/availability
    pub async fn check_availability(&self, query: &AvailabilityQuery) -> ClientResult<Value> {
        let response = self
            .http
            .get(self.url("/api/availability"))
            .query(&[
                ("checkIn", query.check_in.to_string()),
                ("checkOut", query.check_out.to_string()),
                ("guests", query.guests.to_string()),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// GET /api/bookings/{id}
    pub async fn get_booking(&self, id: &str) -> ClientResult<Booking> {
        let response = self
            .http
            .get(self.url(&format!("/api/bookings/{id}")))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// POST /api/bookings — single attempt.
    pub async fn create_booking(&self, payload: &BookingCreate) -> ClientResult<Booking> {
        let response = self
            .http
            .post(self.url("/api/bookings"))
            .json(payload)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// POST /api/bookings with bounded retries.
    ///
    /// Attempt `n` waits `n * retry_delay` before firing (1s, 2s with the
    /// default three attempts). Deterministic rejections (4xx) are final
    /// immediately; only transport failures and 5xx answers are retried.
    pub async fn submit_with_retry(&self, payload: &BookingCreate) -> ClientResult<Booking> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.create_booking(payload).await {
                Ok(booking) => return Ok(booking),
                Err(err) => {
                    if attempt >= self.max_retries || !err.is_retryable() {
                        return Err(err);
                    }
                    tracing::warn!(attempt, error = %err, "booking attempt failed, retrying");
                    tokio::time::sleep(self.retry_delay * attempt).await;
                }
            }
        }
    }

    /// The whole confirmation flow: build the submission from the stored
    /// draft and contact, submit with retries, and clear the store on
    /// success. On failure the stored data is kept so the guest does not
    /// re-enter anything.
    pub async fn confirm_booking<S: DraftStorage>(
        &self,
        store: &DraftStore<S>,
    ) -> ClientResult<Booking> {
        let draft = store.load();
        let contact = store
            .load_contact()
            .ok_or_else(|| ClientError::Validation("guest details are missing".into()))?;
        let payload = build_submission(&draft, &contact)?;

        let booking = self.submit_with_retry(&payload).await?;
        store.clear();
        Ok(booking)
    }
}

impl Default for BookingApi {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = BookingApi::new(&ClientConfig::new("http://localhost:3000/"));
        assert_eq!(api.url("/api/rooms"), "http://localhost:3000/api/rooms");
    }

    #[test]
    fn test_rejected_4xx_is_not_retryable() {
        let err = ClientError::Rejected {
            status: StatusCode::BAD_REQUEST.as_u16(),
            message: "Validation failed".into(),
        };
        assert!(!err.is_retryable());

        let transient = ClientError::Rejected {
            status: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            message: "down".into(),
        };
        assert!(transient.is_retryable());
    }
}
