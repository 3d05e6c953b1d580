//! Request handlers.
//!
//! Both handlers are stateless: no extractors, no shared state, one log line
//! per request. Any HTTP method is accepted; method, params and body are
//! ignored.

use axum::http::StatusCode;

use crate::config::env;

/// `/color`: respond with the currently configured color as the plain body.
///
/// The color is re-read from the environment on every request, so a runtime
/// change to `COLOR` takes effect without a restart.
pub async fn color() -> String {
    let color = env::color();
    tracing::info!(color = %color, "color requested");
    color
}

/// `/ping`: liveness probe, HTTP 200 with an empty body.
pub async fn ping() -> StatusCode {
    tracing::info!("ping requested, responding with HTTP 200");
    StatusCode::OK
}
