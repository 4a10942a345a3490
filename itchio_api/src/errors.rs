//! Error types for the page client.

/// Errors that can occur when fetching itch.io pages.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The server returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// A URL could not be built from the configured base and path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
