//! Campus navigation HTTP service binary.
//!
//! # Endpoints
//!
//! - `GET /` - health descriptor
//! - `GET /christ_university.geojson` - the full campus dataset
//! - `GET /route/<source_id>-to-<destination_id>` - generated route
//!
//! # Configuration
//!
//! - `CAMPUSNAV_DATA_PATH` - path to the GeoJSON dataset
//!   (default: `data/christ_university.geojson`)
//! - `PORT` - HTTP port (default: 8000)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use tracing::info;

use campusnav_service::{create_router, init_logging, AppState, LoggingConfig};

const DEFAULT_DATA_PATH: &str = "data/christ_university.geojson";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    let data_path =
        env::var("CAMPUSNAV_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    info!(data_path = %data_path, port, "starting campus navigation service");

    // A failed load keeps the process up; data endpoints answer 500 until
    // the service restarts with a valid dataset.
    let state = AppState::load(&data_path);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
