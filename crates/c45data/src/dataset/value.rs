//! Feature types and typed values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{join_labels, ValueError};

/// Declared type of a feature.
///
/// The class label is not a separate variant: it is whichever feature sits
/// last in a [`Schema`](super::Schema), and it may have any of these types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "labels", rename_all = "snake_case")]
pub enum FeatureType {
    /// Real-valued feature stored as `f64`.
    Continuous,

    /// Feature restricted to a fixed, ordered set of labels.
    ///
    /// The numeric form of a value is its zero-based position in this list.
    Discrete(Vec<String>),

    /// Feature declared with exactly the labels `0` and `1`.
    Binary,

    /// Identifier column with an enumerated value list.
    ///
    /// Validated and converted exactly like [`FeatureType::Discrete`].
    Id(Vec<String>),
}

impl FeatureType {
    /// Allowed labels for discrete and id features, `None` otherwise.
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            FeatureType::Discrete(labels) | FeatureType::Id(labels) => Some(labels.as_slice()),
            FeatureType::Continuous | FeatureType::Binary => None,
        }
    }

    #[inline]
    pub fn is_continuous(&self) -> bool {
        matches!(self, FeatureType::Continuous)
    }

    /// Returns true for features whose values come from a label list.
    #[inline]
    pub fn is_categorical(&self) -> bool {
        matches!(self, FeatureType::Discrete(_) | FeatureType::Id(_))
    }

    /// Zero-based position of `label` in the allowed-label list.
    pub fn category_index(&self, label: &str) -> Option<usize> {
        self.labels()?.iter().position(|l| l == label)
    }

    /// Validate a raw (already trimmed) token and convert it to a typed value.
    ///
    /// Missing-value tokens are handled by the caller, so every token reaching
    /// this function must be a real value. Continuous values must be finite,
    /// so tokens such as `nan` or `1e999` are rejected.
    pub fn coerce(&self, token: &str) -> Result<FeatureValue, ValueError> {
        match self {
            // NaN is reserved for missing values in the numeric matrix
            FeatureType::Continuous => match token.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(FeatureValue::Continuous(v)),
                _ => Err(ValueError::InvalidNumber {
                    value: token.to_string(),
                }),
            },
            FeatureType::Discrete(labels) | FeatureType::Id(labels) => {
                if labels.iter().any(|l| l == token) {
                    Ok(FeatureValue::Discrete(token.to_string()))
                } else {
                    Err(ValueError::UnknownLabel {
                        value: token.to_string(),
                        allowed: labels.clone(),
                    })
                }
            }
            FeatureType::Binary => match token {
                "0" => Ok(FeatureValue::Binary(false)),
                "1" => Ok(FeatureValue::Binary(true)),
                _ => Err(ValueError::InvalidBinary {
                    value: token.to_string(),
                }),
            },
        }
    }

    /// Check whether an already-typed value satisfies this type.
    ///
    /// [`FeatureValue::Missing`] is accepted by every type.
    pub fn accepts(&self, value: &FeatureValue) -> bool {
        match (self, value) {
            (_, FeatureValue::Missing) => true,
            (FeatureType::Continuous, FeatureValue::Continuous(_)) => true,
            (FeatureType::Binary, FeatureValue::Binary(_)) => true,
            (FeatureType::Discrete(_) | FeatureType::Id(_), FeatureValue::Discrete(label)) => {
                self.category_index(label).is_some()
            }
            _ => false,
        }
    }

    /// Numeric form of a value of this type.
    ///
    /// Categorical labels map to their index, binary values to `0.0`/`1.0`,
    /// continuous values pass through. Missing values, and values this type
    /// does not accept, map to `NaN`.
    pub fn to_f64(&self, value: &FeatureValue) -> f64 {
        match value {
            FeatureValue::Missing => f64::NAN,
            FeatureValue::Continuous(v) => *v,
            FeatureValue::Binary(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            FeatureValue::Discrete(label) => self
                .category_index(label)
                .map(|idx| idx as f64)
                .unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureType::Continuous => write!(f, "continuous"),
            FeatureType::Discrete(labels) => write!(f, "discrete {{{}}}", join_labels(labels)),
            FeatureType::Binary => write!(f, "binary {{0, 1}}"),
            FeatureType::Id(labels) => write!(f, "id {{{}}}", join_labels(labels)),
        }
    }
}

/// A single typed value.
///
/// Values do not know their position; that is given by the owning
/// [`Example`](super::Example).
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureValue {
    Continuous(f64),
    Discrete(String),
    Binary(bool),
    /// The field held the missing-value token.
    Missing,
}

impl FeatureValue {
    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, FeatureValue::Missing)
    }

    /// The continuous value, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Continuous(v) => Some(*v),
            _ => None,
        }
    }

    /// The discrete label, if this is one.
    pub fn as_label(&self) -> Option<&str> {
        match self {
            FeatureValue::Discrete(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Binary(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Continuous(v) => write!(f, "{v}"),
            FeatureValue::Discrete(label) => write!(f, "{label}"),
            FeatureValue::Binary(b) => write!(f, "{}", u8::from(*b)),
            FeatureValue::Missing => write!(f, "?"),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(v: f64) -> Self {
        FeatureValue::Continuous(v)
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        FeatureValue::Binary(b)
    }
}

impl From<&str> for FeatureValue {
    fn from(label: &str) -> Self {
        FeatureValue::Discrete(label.to_string())
    }
}
