//! Error types for signature extraction

use thiserror::Error;

/// Errors that can occur at the edges of the extraction pipeline.
///
/// The extractors themselves never fail; they degrade to "no value".
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to parse the raw message structure
    #[error("Failed to parse message structure: {0}")]
    Structure(String),

    /// Failed to read a limits configuration document
    #[error("Invalid limits configuration: {0}")]
    Config(String),
}

/// Result type for signature extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
