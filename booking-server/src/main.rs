//! booking-server — hotel booking BFF
//!
//! Long-running service that:
//! - Terminates browser requests for the booking funnel
//! - Validates booking payloads before they reach the backend
//! - Proxies CRUD operations to the backend booking service
//! - Maps backend failures into the unified error envelope

use booking_server::core::{Config, Server};
use booking_server::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    logger::init_logger();

    let config = Config::from_env();
    tracing::info!("Starting booking-server (env: {})", config.environment);

    Server::new(config).run().await
}
