//! Fatal server errors.

use thiserror::Error;

/// The only failure class in this service: the listener could not be set up or
/// the serve loop died. Both are unrecoverable; the process logs and exits.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind (port in use, permission denied, bad port).
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop returned an I/O error.
    #[error("server I/O error: {0}")]
    Serve(#[from] std::io::Error),
}
