//! Error types for the `.names` and `.data` readers.

use crate::dataset::ValueError;

/// Errors raised while reading a `.names` schema file.
///
/// Line numbers are 1-based physical lines of the source text, and `text`
/// is the line after comment stripping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("line {line}: expected 'name: type' but found '{text}'")]
    MissingSeparator { line: usize, text: String },

    #[error("line {line}: feature name is empty in '{text}'")]
    EmptyName { line: usize, text: String },

    #[error("line {line}: unknown type '{spec}' for feature '{name}'")]
    UnknownType {
        line: usize,
        name: String,
        spec: String,
        text: String,
    },

    #[error("line {line}: label '{label}' is declared twice for feature '{name}'")]
    DuplicateLabel {
        line: usize,
        name: String,
        label: String,
        text: String,
    },

    #[error("line {line}: duplicate feature name '{name}'")]
    DuplicateName {
        line: usize,
        name: String,
        text: String,
    },

    #[error("schema file contains no declarations")]
    Empty,
}

/// Errors raised while reading a `.data` records file.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected {expected} fields but found {got} in '{text}'")]
    FieldCount {
        line: usize,
        expected: usize,
        got: usize,
        text: String,
    },

    #[error("line {line}: invalid value for feature '{feature}' (column {column}): {reason}")]
    InvalidValue {
        line: usize,
        /// 0-based column in schema order.
        column: usize,
        feature: String,
        reason: ValueError,
    },
}

impl SchemaError {
    /// Source line of the error, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            SchemaError::MissingSeparator { line, .. }
            | SchemaError::EmptyName { line, .. }
            | SchemaError::UnknownType { line, .. }
            | SchemaError::DuplicateLabel { line, .. }
            | SchemaError::DuplicateName { line, .. } => Some(*line),
            SchemaError::Empty => None,
        }
    }

    /// Cleaned text of the offending line, if the error is tied to one.
    pub fn text(&self) -> Option<&str> {
        match self {
            SchemaError::MissingSeparator { text, .. }
            | SchemaError::EmptyName { text, .. }
            | SchemaError::UnknownType { text, .. }
            | SchemaError::DuplicateLabel { text, .. }
            | SchemaError::DuplicateName { text, .. } => Some(text),
            SchemaError::Empty => None,
        }
    }
}

impl ParseError {
    /// Source line of the error.
    pub fn line(&self) -> usize {
        match self {
            ParseError::FieldCount { line, .. } | ParseError::InvalidValue { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_count_message() {
        let err = ParseError::FieldCount {
            line: 4,
            expected: 3,
            got: 2,
            text: "23,Tue".into(),
        };
        assert_eq!(err.to_string(), "line 4: expected 3 fields but found 2 in '23,Tue'");
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn invalid_value_includes_reason() {
        let err = ParseError::InvalidValue {
            line: 2,
            column: 1,
            feature: "day".into(),
            reason: ValueError::UnknownLabel {
                value: "Sun".into(),
                allowed: vec!["Mon".into(), "Tue".into()],
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("line 2: invalid value for feature 'day'"), "{msg}");
        assert!(msg.contains("'Sun'") && msg.contains("{Mon, Tue}"), "{msg}");
    }

    #[test]
    fn schema_error_lines() {
        let err = SchemaError::UnknownType {
            line: 7,
            name: "x".into(),
            spec: "bogus".into(),
            text: "x: bogus".into(),
        };
        assert_eq!(err.line(), Some(7));
        assert_eq!(err.text(), Some("x: bogus"));
        assert_eq!(SchemaError::Empty.line(), None);
        assert_eq!(SchemaError::Empty.text(), None);
    }
}
