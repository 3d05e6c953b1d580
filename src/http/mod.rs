//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, optional segment layer, serve loop)
//!     → handlers.rs (/color, /ping)
//!     → response to client
//! ```

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ServerError;
pub use server::HttpServer;
