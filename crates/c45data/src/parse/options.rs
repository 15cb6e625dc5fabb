//! Parser configuration.

use std::fmt;
use std::str::FromStr;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::utils::Parallelism;

/// Where the class declaration sits in a `.names` file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassLocation {
    /// The colon-less declaration is the class wherever it appears.
    /// Without one, the last declaration is the class.
    #[default]
    Auto,
    /// The first declaration is the class.
    First,
    /// The last declaration is the class.
    Last,
}

/// Where the label sits on each record line of a `.data` file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColumn {
    #[default]
    Last,
    /// The label is the first field; it is moved to the end before validation.
    First,
}

impl fmt::Display for ClassLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClassLocation::Auto => "auto",
            ClassLocation::First => "first",
            ClassLocation::Last => "last",
        })
    }
}

impl FromStr for ClassLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ClassLocation::Auto),
            "first" => Ok(ClassLocation::First),
            "last" => Ok(ClassLocation::Last),
            other => Err(format!(
                "unknown class location '{other}' (expected auto, first or last)"
            )),
        }
    }
}

impl fmt::Display for LabelColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LabelColumn::Last => "last",
            LabelColumn::First => "first",
        })
    }
}

impl FromStr for LabelColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "last" => Ok(LabelColumn::Last),
            "first" => Ok(LabelColumn::First),
            other => Err(format!(
                "unknown label column '{other}' (expected last or first)"
            )),
        }
    }
}

/// Options shared by the schema loader and the record reader.
///
/// # Example
///
/// ```
/// use c45data::parse::{ClassLocation, ParseOptions};
///
/// // Defaults: "?" marks missing values, class found automatically
/// let options = ParseOptions::default();
/// assert_eq!(options.missing_token, "?");
///
/// let options = ParseOptions::builder()
///     .missing_token("NA")
///     .class_location(ClassLocation::Last)
///     .build();
/// assert_eq!(options.class_location, ClassLocation::Last);
/// ```
#[derive(Clone, Debug, Builder)]
#[builder(derive(Clone, Debug))]
pub struct ParseOptions {
    /// Field content that denotes a missing value (default: `?`).
    #[builder(default = "?".to_string(), into)]
    pub missing_token: String,
    /// Where the class declaration sits in the `.names` file (default: Auto).
    #[builder(default)]
    pub class_location: ClassLocation,
    /// Where the label sits on record lines (default: Last).
    #[builder(default)]
    pub label_column: LabelColumn,
    /// Treat the first non-class declaration as an identifier column.
    #[builder(default)]
    pub first_feature_is_id: bool,
    /// Validate record lines on the rayon pool (default: Sequential).
    #[builder(default)]
    pub parallelism: Parallelism,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
