//! `.names` schema file reader.

use std::collections::HashSet;

use super::error::SchemaError;
use super::lines::{content_lines, split_values};
use super::options::{ClassLocation, ParseOptions};
use crate::dataset::{FeatureMeta, FeatureType, Schema};

/// Name given to a class declared without `name:`.
pub const DEFAULT_CLASS_NAME: &str = "class";

/// One non-blank line of a `.names` file, split at the first colon.
#[derive(Debug)]
struct Declaration<'a> {
    line: usize,
    text: &'a str,
    /// `None` for a bare (colon-less) declaration.
    name: Option<&'a str>,
    spec: &'a str,
}

impl<'a> Declaration<'a> {
    fn read(line: usize, text: &'a str) -> Self {
        match text.split_once(':') {
            Some((name, spec)) => Self {
                line,
                text,
                name: Some(name.trim()),
                spec: spec.trim(),
            },
            None => Self {
                line,
                text,
                name: None,
                spec: text,
            },
        }
    }

    fn is_bare(&self) -> bool {
        self.name.is_none()
    }

    fn name(&self) -> &'a str {
        self.name.unwrap_or(DEFAULT_CLASS_NAME)
    }

    fn missing_separator(&self) -> SchemaError {
        SchemaError::MissingSeparator {
            line: self.line,
            text: self.text.to_string(),
        }
    }

    fn unknown_type(&self) -> SchemaError {
        SchemaError::UnknownType {
            line: self.line,
            name: self.name().to_string(),
            spec: self.spec.to_string(),
            text: self.text.to_string(),
        }
    }

    fn duplicate_name(&self) -> SchemaError {
        SchemaError::DuplicateName {
            line: self.line,
            name: self.name().to_string(),
            text: self.text.to_string(),
        }
    }

    /// Interpret the type spec. `as_id` forces an identifier column.
    fn feature_type(&self, as_id: bool) -> Result<FeatureType, SchemaError> {
        let spec = self.spec;
        if spec.eq_ignore_ascii_case("continuous") {
            return if as_id {
                Err(self.unknown_type())
            } else {
                Ok(FeatureType::Continuous)
            };
        }

        let list = match spec.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => inner,
            // a lone bare word is an unknown keyword, not a one-label list
            None if !spec.contains(',') => return Err(self.unknown_type()),
            None => spec,
        };

        let mut labels: Vec<String> = Vec::new();
        for label in split_values(list) {
            if label.is_empty() {
                return Err(self.unknown_type());
            }
            if labels.iter().any(|l| l == label) {
                return Err(SchemaError::DuplicateLabel {
                    line: self.line,
                    name: self.name().to_string(),
                    label: label.to_string(),
                    text: self.text.to_string(),
                });
            }
            labels.push(label.to_string());
        }

        if as_id {
            Ok(FeatureType::Id(labels))
        } else if is_binary(&labels) {
            Ok(FeatureType::Binary)
        } else {
            Ok(FeatureType::Discrete(labels))
        }
    }

    fn to_meta(&self, as_id: bool) -> Result<FeatureMeta, SchemaError> {
        if self.name == Some("") {
            return Err(SchemaError::EmptyName {
                line: self.line,
                text: self.text.to_string(),
            });
        }
        Ok(FeatureMeta::new(self.name(), self.feature_type(as_id)?))
    }
}

fn is_binary(labels: &[String]) -> bool {
    labels.len() == 2 && labels.iter().any(|l| l == "0") && labels.iter().any(|l| l == "1")
}

/// Position of the class declaration according to `location`.
///
/// With [`ClassLocation::Auto`] the first bare line is the class, or the last
/// declaration when there is none. Stray bare lines are rejected by the caller.
fn class_index(decls: &[Declaration<'_>], location: ClassLocation) -> usize {
    match location {
        ClassLocation::Auto => decls
            .iter()
            .position(Declaration::is_bare)
            .unwrap_or(decls.len() - 1),
        ClassLocation::First => 0,
        ClassLocation::Last => decls.len() - 1,
    }
}

/// Read the text of a `.names` file into a [`Schema`].
///
/// Each non-blank line declares one feature as `name: type-spec`. A line
/// without a colon declares the class (named `class`). The class always ends
/// up as the last schema entry, wherever it was declared.
///
/// # Errors
///
/// Returns the first [`SchemaError`] in file order.
///
/// # Example
///
/// ```
/// use c45data::parse::{parse_names, ParseOptions};
/// use c45data::dataset::FeatureType;
///
/// let text = "yes, no.\nage: continuous.\nday: Mon, Tue, Wed.\n";
/// let schema = parse_names(text, &ParseOptions::default()).unwrap();
///
/// assert_eq!(schema.label().name, "class");
/// assert_eq!(schema[0].feature_type, FeatureType::Continuous);
/// ```
pub fn parse_names(text: &str, options: &ParseOptions) -> Result<Schema, SchemaError> {
    let decls: Vec<Declaration<'_>> = content_lines(text)
        .map(|(line, text)| Declaration::read(line, text))
        .collect();

    if decls.is_empty() {
        return Err(SchemaError::Empty);
    }

    let class = class_index(&decls, options.class_location);
    let id_index = options
        .first_feature_is_id
        .then_some(if class == 0 { 1 } else { 0 });

    let mut seen: HashSet<&str> = HashSet::with_capacity(decls.len());
    let mut entries = Vec::with_capacity(decls.len());
    for (idx, decl) in decls.iter().enumerate() {
        if decl.is_bare() && idx != class {
            return Err(decl.missing_separator());
        }
        let meta = decl.to_meta(id_index == Some(idx))?;
        if !seen.insert(decl.name()) {
            return Err(decl.duplicate_name());
        }
        entries.push(meta);
    }

    let label = entries.remove(class);
    let schema = Schema::from_unique(entries, label);
    tracing::debug!(
        n_features = schema.n_features(),
        label = %schema.label().name,
        "parsed schema"
    );
    Ok(schema)
}
