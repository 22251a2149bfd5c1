//! # footprint-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Footprint API.
//! Binds to a configurable port (default 8080).

use footprint_api::state::{AppConfig, AppState, LogFormat};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No subscriber yet: the log format is part of what failed to load.
            eprintln!("footprint-api: {e}");
            return Err(e.into());
        }
    };
    init_tracing(config.log_format);

    let port = config.port;
    tracing::info!(
        require_input = config.require_input,
        "configuration loaded"
    );

    let app = footprint_api::app(AppState::with_config(config));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Footprint API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
