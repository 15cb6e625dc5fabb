//! Error types for the typed data model.

/// Errors raised when a raw token cannot be coerced into a typed value.
///
/// These carry no position information; the record reader wraps them with
/// the line number and feature name (see [`crate::parse::ParseError`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("'{value}' is not a valid number")]
    InvalidNumber { value: String },

    #[error("'{value}' is not one of the allowed labels {{{}}}", join_labels(.allowed))]
    UnknownLabel { value: String, allowed: Vec<String> },

    #[error("'{value}' is not a binary value (expected 0 or 1)")]
    InvalidBinary { value: String },
}

/// Errors raised when building schemas, examples or example sets directly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("schema must contain at least the label feature")]
    EmptySchema,

    #[error("duplicate feature name '{0}'")]
    DuplicateName(String),

    #[error("example has {got} values but the schema declares {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("value {value} does not match feature '{feature}' (index {index}) of type {expected}")]
    TypeMismatch {
        index: usize,
        feature: String,
        expected: String,
        value: String,
    },

    #[error("example schema is not compatible with the example set schema")]
    SchemaMismatch,
}

pub(crate) fn join_labels(labels: &[String]) -> String {
    labels.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_label_lists_allowed_set() {
        let err = ValueError::UnknownLabel {
            value: "Sun".to_string(),
            allowed: vec!["Mon".to_string(), "Tue".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'Sun'"), "{msg}");
        assert!(msg.contains("{Mon, Tue}"), "{msg}");
    }

    #[test]
    fn length_mismatch_message() {
        let err = DatasetError::LengthMismatch { expected: 3, got: 2 };
        assert_eq!(err.to_string(), "example has 2 values but the schema declares 3");
    }
}
