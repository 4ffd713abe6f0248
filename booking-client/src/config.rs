//! Client configuration

/// Configuration for connecting to the BFF.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// BFF base URL (e.g. "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Maximum attempts for the confirmation submission
    pub max_retries: u32,

    /// Base delay between retries in milliseconds; attempt `n` waits
    /// `n * retry_delay_ms` (1s, 2s, 3s with the default)
    pub retry_delay_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the maximum submission attempts
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base retry delay
    pub fn with_retry_delay_ms(mut self, ms: u64) -> Self {
        self.retry_delay_ms = ms;
        self
    }

    /// Create a [`BookingApi`](crate::BookingApi) from this configuration
    pub fn build(&self) -> crate::BookingApi {
        crate::BookingApi::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
