//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping transport errors and
/// adding configuration and input validation failures.
///
/// Resolution itself never returns these: the orchestrator degrades to an
/// empty record. They surface from direct calls such as
/// [`crate::extract::fetch_record`] and from settings loading.
#[derive(Debug)]
pub enum ItchMetaError {
    /// An error from the underlying HTTP client.
    Api(itchio_api::Error),
    /// Settings could not be read, parsed, or failed verification.
    Config(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for ItchMetaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "itch.io request error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ItchMetaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<itchio_api::Error> for ItchMetaError {
    fn from(e: itchio_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<toml::de::Error> for ItchMetaError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}
