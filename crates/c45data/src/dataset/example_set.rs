//! Collection of examples sharing one schema.

use std::sync::Arc;

use ndarray::{s, Array1, Array2};

use super::error::DatasetError;
use super::example::Example;
use super::schema::Schema;
use super::sequence::{sequence_impls, Sequence};

/// Ordered, read-only collection of [`Example`]s that share one [`Schema`].
///
/// The schema is attached at construction and never changes. There are no
/// in-place mutation methods: derived collections (see [`ExampleSet::filter`])
/// are new sets sharing the same schema handle.
///
/// # Example
///
/// ```
/// use c45data::io::parse_c45;
/// use c45data::parse::ParseOptions;
/// use c45data::Sequence;
///
/// let names = "age: continuous.\nday: Mon, Tue, Wed.\noutcome: yes, no.\n";
/// let data = "23,Tue,yes\n41,Mon,no\n";
/// let set = parse_c45(names, data, &ParseOptions::default()).unwrap();
///
/// assert_eq!(set.len(), 2);
/// let matrix = set.to_numeric_matrix();
/// assert_eq!(matrix.row(0).to_vec(), vec![23.0, 1.0, 0.0]);
/// ```
#[derive(Clone, Debug)]
pub struct ExampleSet {
    schema: Arc<Schema>,
    examples: Vec<Example>,
}

impl ExampleSet {
    /// An empty set over `schema`.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            examples: Vec::new(),
        }
    }

    /// Build a set from existing examples.
    ///
    /// # Errors
    ///
    /// [`DatasetError::SchemaMismatch`] if any example's schema is not
    /// [compatible](Schema::is_compatible) with `schema`.
    pub fn from_examples(schema: Arc<Schema>, examples: Vec<Example>) -> Result<Self, DatasetError> {
        for example in &examples {
            if !Arc::ptr_eq(example.schema(), &schema) && !example.schema().is_compatible(&schema) {
                return Err(DatasetError::SchemaMismatch);
            }
        }
        Ok(Self { schema, examples })
    }

    /// Examples built by the record reader against this exact schema.
    pub(crate) fn from_validated(schema: Arc<Schema>, examples: Vec<Example>) -> Self {
        Self { schema, examples }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Number of columns of [`to_numeric_matrix`](Self::to_numeric_matrix).
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.schema.len()
    }

    /// A new set containing the examples for which `predicate` holds, in
    /// input order, sharing this set's schema.
    pub fn filter<F>(&self, mut predicate: F) -> ExampleSet
    where
        F: FnMut(&Example) -> bool,
    {
        let examples = self
            .examples
            .iter()
            .filter(|ex| predicate(ex))
            .cloned()
            .collect();
        Self {
            schema: Arc::clone(&self.schema),
            examples,
        }
    }

    /// Convert every example into a row of floats.
    ///
    /// Shape: `[n_examples, schema.len()]`, columns in schema order with the
    /// label last. Discrete labels become their index in the declared label
    /// list, binary values become `0.0`/`1.0`, continuous values are copied
    /// unchanged and missing values become `NaN`. No scaling is applied.
    pub fn to_numeric_matrix(&self) -> Array2<f64> {
        let mut out = Array2::from_elem((self.examples.len(), self.schema.len()), f64::NAN);
        for (mut row, example) in out.outer_iter_mut().zip(&self.examples) {
            for ((cell, meta), value) in row.iter_mut().zip(self.schema.iter()).zip(example.iter()) {
                *cell = meta.feature_type.to_f64(value);
            }
        }
        out
    }

    /// Split [`to_numeric_matrix`](Self::to_numeric_matrix) into the feature
    /// block `[n_examples, n_features]` and the label column.
    pub fn to_features_and_labels(&self) -> (Array2<f64>, Array1<f64>) {
        let matrix = self.to_numeric_matrix();
        let label = self.schema.label_index();
        let features = matrix.slice(s![.., ..label]).to_owned();
        let labels = matrix.column(label).to_owned();
        (features, labels)
    }

    /// Number of examples whose value at `index` is missing.
    pub fn count_missing(&self, index: usize) -> usize {
        self.examples
            .iter()
            .filter(|ex| ex.get(index).is_some_and(|v| v.is_missing()))
            .count()
    }
}

impl Sequence for ExampleSet {
    type Item = Example;

    #[inline]
    fn as_slice(&self) -> &[Example] {
        &self.examples
    }
}

sequence_impls!(ExampleSet, Example);
