//! Error types for provider operations

use thiserror::Error;

/// Main error type for the JSON entity providers
///
/// "Not applicable" is never an error: applicability checks return `false`
/// and converter resolution returns `None`, so the framework can fall
/// through to its other providers.
#[derive(Debug, Error)]
pub enum ConnegError {
    /// The request entity stream held no bytes at all.
    ///
    /// Kept distinct from [`ConnegError::Decode`] so callers can tell
    /// "nothing was sent" apart from "something invalid was sent".
    #[error("No content: entity stream is empty")]
    NoContent,

    /// The entity bytes were not valid JSON for the declared type.
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// The value could not be encoded as JSON for the declared type.
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A parameter string was not valid JSON for the declared type.
    ///
    /// Wraps the decode cause so the framework's uniform bad-parameter
    /// handling applies instead of a codec error type leaking through.
    #[error("Invalid parameter: {0}")]
    InvalidParam(#[source] serde_json::Error),

    /// The entity stream failed while reading or writing.
    #[error("Entity stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A media type string could not be parsed as `type/subtype`.
    #[error("Invalid media type: {0}")]
    InvalidMediaType(String),
}

/// Result type alias for provider operations
pub type ConnegResult<T> = Result<T, ConnegError>;
