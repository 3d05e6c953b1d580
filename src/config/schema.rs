//! Configuration snapshot.
//!
//! The snapshot is captured once at startup and stays immutable for the process
//! lifetime. Only the color is observable per request, and the `/color` handler
//! re-reads it from the environment instead of using this struct.

use crate::config::env;

/// Startup configuration for the colorteller service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listener port (kept as a string; the bind address is derived from it).
    pub port: String,

    /// Color returned by `/color` at snapshot time.
    pub color: String,

    /// Deployment stage, used only in the tracing segment name.
    pub stage: String,

    /// Whether both handlers are wrapped in the tracing segment layer.
    pub tracing_enabled: bool,
}

impl Config {
    /// Capture the current environment into an immutable snapshot.
    pub fn from_env() -> Self {
        Self {
            port: env::server_port(),
            color: env::color(),
            stage: env::stage(),
            tracing_enabled: env::tracing_enabled(),
        }
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Fixed name attached to every tracing segment.
    pub fn segment_name(&self) -> String {
        format!("{}-colorteller-{}", self.stage, self.color)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: env::DEFAULT_PORT.to_string(),
            color: env::DEFAULT_COLOR.to_string(),
            stage: env::DEFAULT_STAGE.to_string(),
            tracing_enabled: false,
        }
    }
}
