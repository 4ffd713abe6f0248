//! Logging Infrastructure

/// Initialize tracing with the env-filter, falling back to a sensible
/// default when `RUST_LOG` is not set.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_server=info,tower_http=info".into()),
        )
        .init();
}
