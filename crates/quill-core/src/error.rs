//! Error types for Quill Core.

use crate::NumberFormat;
use thiserror::Error;

/// Result type alias for Quill operations.
pub type Result<T> = std::result::Result<T, QuillError>;

/// Main error type for the Quill templating engine.
#[derive(Debug, Error)]
pub enum QuillError {
    /// A template or typed-template definition is invalid.
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// A number format was selected that has no conversion yet.
    #[error("Number format '{0}' is not implemented")]
    NotImplemented(NumberFormat),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Construction-time failures. The only fix is a corrected definition or type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The definition contains no `{token}`.
    #[error("template contains no tokens: {0:?}")]
    NoTokens(String),

    /// The typed context exposes nothing to read.
    #[error("type '{type_name}' has no readable fields")]
    NoReadableFields { type_name: String },

    /// None of the readable fields is named like a token.
    #[error("no field of type '{type_name}' matches a template token (fields: {fields:?})")]
    NoMatchingFields {
        type_name: String,
        fields: Vec<String>,
    },
}

impl QuillError {
    /// Returns the definition error, if that is what this is.
    pub fn as_definition(&self) -> Option<&DefinitionError> {
        match self {
            QuillError::Definition(err) => Some(err),
            _ => None,
        }
    }
}
