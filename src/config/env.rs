//! Environment variable accessors.
//!
//! Each accessor reads one named variable and substitutes a fixed default when
//! the variable is unset or empty. Reads are fresh on every call.

/// Variable holding the listener port.
pub const SERVER_PORT_VAR: &str = "SERVER_PORT";
/// Variable holding the color served by `/color`.
pub const COLOR_VAR: &str = "COLOR";
/// Variable holding the deployment stage, used only in the tracing segment name.
pub const STAGE_VAR: &str = "STAGE";
/// Variable enabling the tracing wrapper when set to the literal `"1"`.
pub const XRAY_TRACING_VAR: &str = "ENABLE_ENVOY_XRAY_TRACING";

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_COLOR: &str = "black";
pub const DEFAULT_STAGE: &str = "default";

fn var_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Listener port, `"8080"` when unset or empty.
pub fn server_port() -> String {
    var_or(SERVER_PORT_VAR, DEFAULT_PORT)
}

/// Color served by `/color`, `"black"` when unset or empty.
pub fn color() -> String {
    var_or(COLOR_VAR, DEFAULT_COLOR)
}

/// Deployment stage, `"default"` when unset or empty.
pub fn stage() -> String {
    var_or(STAGE_VAR, DEFAULT_STAGE)
}

/// Whether the tracing wrapper is enabled.
///
/// True only for the exact literal `"1"`; any other value, including `"true"`,
/// leaves tracing disabled.
pub fn tracing_enabled() -> bool {
    std::env::var(XRAY_TRACING_VAR)
        .map(|value| value == "1")
        .unwrap_or(false)
}
