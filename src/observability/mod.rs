//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and server produce:
//!     → logging.rs (structured log events via tracing)
//!     → tracing.rs (per-request segment spans, when enabled)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → any tracing subscriber layer wired by the deployment
//! ```
//!
//! # Design Decisions
//! - Segment tracing is opt-in via the environment; off by default
//! - The segment layer is a pure pass-through: status, body and headers are
//!   untouched whether or not it is installed

pub mod logging;
pub mod tracing;
