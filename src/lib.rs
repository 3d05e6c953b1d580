//! Colorteller demo backend library.

pub mod config;
pub mod http;
pub mod observability;

pub use config::Config;
pub use http::HttpServer;
pub use observability::tracing::SegmentLayer;
