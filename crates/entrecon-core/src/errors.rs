//! Error taxonomy for the reconciliation facilities.
//!
//! The engine core itself raises no errors: unparsable field values degrade
//! to the absent value inside the normalizer, and empty snapshots are valid
//! diff input. Only the payload extraction helpers return `Result`.

use thiserror::Error;

/// Result type alias using ReconError
pub type Result<T> = std::result::Result<T, ReconError>;

/// Errors raised by the payload extraction helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReconError {
    /// Source payload is not valid JSON or its root is not an object
    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ReconError {
    /// Stable error code for programmatic handling and test assertions.
    pub fn code(&self) -> &'static str {
        match self {
            ReconError::InvalidPayload { .. } => "ERR_INVALID_PAYLOAD",
            ReconError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for ReconError {
    fn from(err: serde_json::Error) -> Self {
        ReconError::Serialization {
            message: err.to_string(),
        }
    }
}
