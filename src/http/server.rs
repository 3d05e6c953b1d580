//! HTTP server setup.
//!
//! # Responsibilities
//! - Build the Axum router with the two fixed routes
//! - Conditionally wrap all handlers in the tracing segment layer
//! - Serve on a caller-supplied listener until the process dies
//!
//! There is deliberately no graceful shutdown, no timeouts and no retry: the
//! serve loop blocks for the lifetime of the process and any listener failure
//! is fatal.

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::http::handlers;
use crate::observability::tracing::SegmentLayer;

/// HTTP server for the colorteller service.
pub struct HttpServer {
    router: Router,
    config: Config,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration snapshot.
    pub fn new(config: Config) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// The segment layer is applied only when tracing is enabled, with a name
    /// fixed at startup; it must not change the observable response.
    fn build_router(config: &Config) -> Router {
        let mut router = Router::new()
            .route("/color", any(handlers::color))
            .route("/ping", any(handlers::ping));

        if config.tracing_enabled {
            router = router.layer(SegmentLayer::new(config.segment_name()));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns only on a fatal I/O error in the serve loop.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            tracing_enabled = self.config.tracing_enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }

    /// Get a reference to the config snapshot.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
