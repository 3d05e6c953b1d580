//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → env.rs (per-variable accessors, default substitution)
//!     → schema.rs (Config snapshot, captured once at startup)
//!     → handed to the server bootstrap
//!
//! Per request:
//!     handlers call env::color() directly
//!     → a runtime COLOR change takes effect without restart
//! ```
//!
//! # Design Decisions
//! - Absence or emptiness of a variable is a normal case, never an error
//! - The snapshot is immutable; only the color is re-read per request
//! - Accessors are pure reads with no caching

pub mod env;
pub mod schema;

pub use schema::Config;
