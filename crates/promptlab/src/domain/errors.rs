//! Domain Errors
//!
//! Error types for completion and configuration failures.

use thiserror::Error;

/// Errors surfaced by the library.
///
/// Template building never fails; only configuration parsing and the
/// remote completion call produce errors, and those are passed to the
/// caller as-is.
#[derive(Debug, Error)]
pub enum PromptLabError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode completion response: {0}")]
    Decode(String),
}

impl PromptLabError {
    pub fn config<T: AsRef<str>>(message: T) -> Self {
        Self::Config(message.as_ref().to_string())
    }

    /// HTTP status of a provider-side rejection, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
