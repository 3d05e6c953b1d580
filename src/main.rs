//! Colorteller demo backend.
//!
//! A minimal service-mesh demo service: `/color` answers with the configured
//! color, `/ping` answers liveness probes. When `ENABLE_ENVOY_XRAY_TRACING=1`
//! both handlers are wrapped in a tracing segment named
//! `"<stage>-colorteller-<color>"`.
//!
//! Control flow: read config → build router → (optional) instrument → listen
//! forever. A bind failure is fatal: log and exit non-zero.

use tokio::net::TcpListener;

use colorteller::config::Config;
use colorteller::http::{HttpServer, ServerError};
use colorteller::observability::logging;

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(error) = run().await {
        tracing::error!(error = %error, "fatal");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env();

    tracing::info!(
        color = %config.color,
        port = %config.port,
        "starting colorteller"
    );

    if config.tracing_enabled {
        tracing::info!(segment = %config.segment_name(), "xray tracing enabled");
    }

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
