//! Error types for codec operations.

use thiserror::Error;

/// Error while writing or reading JSON text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input text is not well-formed JSON.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Value cannot be expressed as JSON.
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Top-level JSON is not an object.
    #[error("expected JSON object, got {0}")]
    NotObject(&'static str),

    /// Missing required field.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Field exists but holds the wrong JSON type.
    #[error("field '{field}' should be {expected}, got {found}")]
    FieldType {
        /// Field name.
        field: String,
        /// Expected JSON type.
        expected: &'static str,
        /// Actual JSON type.
        found: &'static str,
    },

    /// Template rejected otherwise well-typed fields.
    #[error("invalid {template}: {reason}")]
    Invalid {
        /// Template name.
        template: &'static str,
        /// Error reason.
        reason: String,
    },
}

impl CodecError {
    /// Create an [`Invalid`](Self::Invalid) error.
    pub fn invalid(template: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            template,
            reason: reason.into(),
        }
    }

    /// Line and column of a parse error, if this is one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Parse(e) => Some((e.line(), e.column())),
            _ => None,
        }
    }
}
