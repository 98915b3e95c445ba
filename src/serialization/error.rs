//! Error types for reading and writing model payloads

use thiserror::Error;

/// Errors raised while decoding from a parse node or encoding to a writer
#[derive(Error, Debug)]
pub enum SerializationError {
    /// The payload held a different JSON type than the field expects
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// The value had the right JSON type but could not be interpreted
    #[error("Invalid {kind} value '{value}': {reason}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// A number does not fit the integer width of the field
    #[error("Integer {value} does not fit in {target}")]
    IntegerOutOfRange { value: String, target: &'static str },

    /// Enum string outside the enum's table
    #[error("Unknown {type_name} value: {value}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// Nested payload deeper than the configured limit
    #[error("Maximum nesting depth exceeded: {depth} > {max}")]
    MaxDepthExceeded { depth: usize, max: usize },

    /// JSON text could not be parsed or produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The writer rejected a value
    #[error("Write error: {0}")]
    Write(String),
}

impl SerializationError {
    pub(crate) fn invalid(kind: &'static str, value: &str, reason: impl ToString) -> Self {
        SerializationError::InvalidValue {
            kind,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_message() {
        let err = SerializationError::UnknownEnumValue {
            type_name: "PageLayoutType",
            value: "poster".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown PageLayoutType value: poster");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = SerializationError::TypeMismatch {
            expected: "string",
            found: "number".to_string(),
        };
        assert_eq!(err.to_string(), "Type mismatch: expected string, found number");
    }
}
