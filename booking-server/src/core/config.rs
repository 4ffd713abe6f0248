//! BFF server configuration

/// BFF server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port
    pub port: u16,
    /// Base URL of the backend booking service
    pub backend_url: String,
    /// Per-request timeout towards the backend, in milliseconds
    pub backend_timeout_ms: u64,
    /// Allowed CORS origins, comma-separated. Empty means permissive
    /// (development).
    pub cors_origins: Vec<String>,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            backend_url: std::env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into())
                .trim_end_matches('/')
                .to_string(),
            backend_timeout_ms: std::env::var("BACKEND_TIMEOUT_MS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10_000),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether the server runs in production. Upstream failure bodies are
    /// not exposed to browsers in production.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            backend_url: "http://localhost:8080".into(),
            backend_timeout_ms: 10_000,
            cors_origins: Vec::new(),
            environment: "development".into(),
        }
    }
}
