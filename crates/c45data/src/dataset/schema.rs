//! Schema: ordered feature declarations with the class label last.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::DatasetError;
use super::sequence::{sequence_impls, Sequence};
use super::value::FeatureType;

/// Name and type of a single feature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMeta {
    pub name: String,
    pub feature_type: FeatureType,
}

impl FeatureMeta {
    pub fn new(name: impl Into<String>, feature_type: FeatureType) -> Self {
        Self {
            name: name.into(),
            feature_type,
        }
    }

    pub fn continuous(name: impl Into<String>) -> Self {
        Self::new(name, FeatureType::Continuous)
    }

    pub fn discrete<S: Into<String>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            name,
            FeatureType::Discrete(labels.into_iter().map(Into::into).collect()),
        )
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, FeatureType::Binary)
    }
}

/// Ordered, immutable list of feature declarations.
///
/// The last entry is always the class label. This is enforced by the only
/// constructor, [`Schema::new`], which takes the label separately and
/// appends it. Feature names are unique across all entries, label included.
///
/// # Example
///
/// ```
/// use c45data::dataset::{FeatureMeta, FeatureType, Schema, Sequence};
///
/// let schema = Schema::new(
///     vec![
///         FeatureMeta::continuous("age"),
///         FeatureMeta::discrete("day", ["Mon", "Tue", "Wed"]),
///     ],
///     FeatureMeta::discrete("outcome", ["yes", "no"]),
/// )
/// .unwrap();
///
/// assert_eq!(schema.len(), 3);
/// assert_eq!(schema.label().name, "outcome");
/// assert_eq!(schema[0].feature_type, FeatureType::Continuous);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeatureMeta>", into = "Vec<FeatureMeta>")]
pub struct Schema {
    /// Features in order; the label is the final element.
    entries: Vec<FeatureMeta>,
}

impl Schema {
    /// Build a schema from the non-label features and the label.
    ///
    /// # Errors
    ///
    /// [`DatasetError::DuplicateName`] if two entries share a name.
    pub fn new(features: Vec<FeatureMeta>, label: FeatureMeta) -> Result<Self, DatasetError> {
        let mut entries = features;
        entries.push(label);

        let mut seen = HashSet::with_capacity(entries.len());
        for meta in &entries {
            if !seen.insert(meta.name.as_str()) {
                return Err(DatasetError::DuplicateName(meta.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Build a schema from entries whose names are already known to be
    /// unique.
    pub(crate) fn from_unique(features: Vec<FeatureMeta>, label: FeatureMeta) -> Self {
        let mut entries = features;
        entries.push(label);
        debug_assert_eq!(
            entries.iter().map(|m| m.name.as_str()).collect::<HashSet<_>>().len(),
            entries.len()
        );
        Self { entries }
    }

    /// The class label declaration.
    #[inline]
    pub fn label(&self) -> &FeatureMeta {
        &self.entries[self.label_index()]
    }

    /// Position of the label, always `len() - 1`.
    #[inline]
    pub fn label_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// All declarations except the label.
    #[inline]
    pub fn features(&self) -> &[FeatureMeta] {
        &self.entries[..self.label_index()]
    }

    /// Number of non-label features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.label_index()
    }

    pub fn feature_type(&self, index: usize) -> Option<&FeatureType> {
        self.entries.get(index).map(|m| &m.feature_type)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|m| m.name.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|m| m.name == name)
    }

    /// Whether both schemas declare the same ordered sequence of types.
    ///
    /// Names are not compared.
    pub fn is_compatible(&self, other: &Schema) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.feature_type == b.feature_type)
    }
}

impl Sequence for Schema {
    type Item = FeatureMeta;

    #[inline]
    fn as_slice(&self) -> &[FeatureMeta] {
        &self.entries
    }
}

sequence_impls!(Schema, FeatureMeta);

impl TryFrom<Vec<FeatureMeta>> for Schema {
    type Error = DatasetError;

    /// Treat the last entry of `entries` as the label.
    fn try_from(mut entries: Vec<FeatureMeta>) -> Result<Self, Self::Error> {
        let label = entries.pop().ok_or(DatasetError::EmptySchema)?;
        Schema::new(entries, label)
    }
}

impl From<Schema> for Vec<FeatureMeta> {
    fn from(schema: Schema) -> Self {
        schema.entries
    }
}
