//! # Codec Errors
//!
//! Every failure of a decode surfaces as one [`CodecError`]; nothing is
//! recovered internally and no partial instance is returned. Field-level
//! failures keep their full path (`scores[1].course`) through nesting.

use recmap_core::{ConfigurationError, RecordError, ValidationError};
use thiserror::Error;

/// Error raised while converting between JSON and record instances.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Input text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value was rejected by its field or by the unknown-field policy.
    #[error("decode error: {0}")]
    Decode(#[from] ValidationError),

    /// A record type involved in the conversion has a malformed declaration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The top-level input for a record is not a JSON object.
    #[error("expected a JSON object for record '{record}', found {found}")]
    NotAnObject {
        /// Target record type.
        record: &'static str,
        /// JSON kind found instead.
        found: &'static str,
    },

    /// The top-level input for a record list is not a JSON array.
    #[error("expected a JSON array of '{record}' objects, found {found}")]
    NotAnArray {
        /// Target record type.
        record: &'static str,
        /// JSON kind found instead.
        found: &'static str,
    },

    /// Nested records go deeper than the configured limit.
    #[error("record nesting exceeds the limit of {limit} levels")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
    },
}

impl CodecError {
    /// The validation error inside a `Decode` failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn nested(self, prefix: &str) -> Self {
        match self {
            Self::Decode(e) => Self::Decode(e.nested(prefix)),
            other => other,
        }
    }
}

impl From<RecordError> for CodecError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Configuration(e) => Self::Configuration(e),
            RecordError::Validation(e) => Self::Decode(e),
        }
    }
}
