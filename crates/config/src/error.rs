//! Error types for the configuration module

use mesc::MescError;

/// Errors that can occur during configuration operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic error with a message
    #[error("Error: {0}")]
    Generic(String),

    /// An error that occurred while (de)serializing the config file
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The key passed to `config KEY VALUE` does not exist
    #[error("invalid key: '{0}' is not a valid configuration key")]
    InvalidKey(String),

    /// An error from the MESC (Multiple Endpoint Shared Configuration) system
    #[error("MESC error: {0}")]
    MescError(#[from] MescError),
}
