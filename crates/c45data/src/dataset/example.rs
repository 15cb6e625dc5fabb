//! A single record conforming to a schema.

use std::sync::Arc;

use super::error::DatasetError;
use super::schema::Schema;
use super::sequence::{sequence_impls, Sequence};
use super::value::FeatureValue;

/// One value per schema entry, in schema order, label last.
///
/// Every example holds a shared handle to the schema it was validated
/// against. The values are immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Example {
    schema: Arc<Schema>,
    values: Vec<FeatureValue>,
}

impl Example {
    /// Build an example, validating every value against `schema`.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::LengthMismatch`] if `values.len() != schema.len()`
    /// - [`DatasetError::TypeMismatch`] if a value does not fit its feature
    ///   type (wrong kind, or a label outside the allowed set)
    pub fn new(schema: Arc<Schema>, values: Vec<FeatureValue>) -> Result<Self, DatasetError> {
        if values.len() != schema.len() {
            return Err(DatasetError::LengthMismatch {
                expected: schema.len(),
                got: values.len(),
            });
        }

        for (index, (meta, value)) in schema.iter().zip(&values).enumerate() {
            if !meta.feature_type.accepts(value) {
                return Err(DatasetError::TypeMismatch {
                    index,
                    feature: meta.name.clone(),
                    expected: meta.feature_type.to_string(),
                    value: format!("{value:?}"),
                });
            }
        }

        Ok(Self { schema, values })
    }

    /// Build an example from values produced by [`FeatureType::coerce`].
    ///
    /// [`FeatureType::coerce`]: super::FeatureType::coerce
    pub(crate) fn from_validated(schema: Arc<Schema>, values: Vec<FeatureValue>) -> Self {
        debug_assert_eq!(values.len(), schema.len());
        Self { schema, values }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The class label value.
    #[inline]
    pub fn label(&self) -> &FeatureValue {
        &self.values[self.schema.label_index()]
    }

    /// All values except the label.
    #[inline]
    pub fn features(&self) -> &[FeatureValue] {
        &self.values[..self.schema.label_index()]
    }

    /// Numeric form of every value, in schema order.
    pub fn to_f64_row(&self) -> Vec<f64> {
        self.schema
            .iter()
            .zip(&self.values)
            .map(|(meta, value)| meta.feature_type.to_f64(value))
            .collect()
    }
}

impl Sequence for Example {
    type Item = FeatureValue;

    #[inline]
    fn as_slice(&self) -> &[FeatureValue] {
        &self.values
    }
}

sequence_impls!(Example, FeatureValue);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{FeatureMeta, FeatureType};

    fn schema() -> Arc<Schema> {
        Arc::new(
            Schema::new(
                vec![
                    FeatureMeta::continuous("age"),
                    FeatureMeta::discrete("day", ["Mon", "Tue", "Wed"]),
                ],
                FeatureMeta::discrete("outcome", ["yes", "no"]),
            )
            .unwrap(),
        )
    }

    #[test]
    fn new_and_accessors() {
        let ex = Example::new(schema(), vec![23.0.into(), "Tue".into(), "yes".into()]).unwrap();

        assert_eq!(ex.len(), 3);
        assert_eq!(ex[0], FeatureValue::Continuous(23.0));
        assert_eq!(ex[1].as_label(), Some("Tue"));
        assert_eq!(ex.label().as_label(), Some("yes"));
        assert_eq!(ex.features().len(), 2);
        assert_eq!(&ex[1..], &[FeatureValue::from("Tue"), FeatureValue::from("yes")]);
        assert_eq!(ex.to_f64_row(), vec![23.0, 1.0, 0.0]);
    }

    #[test]
    fn missing_values_are_accepted() {
        let ex = Example::new(
            schema(),
            vec![FeatureValue::Missing, FeatureValue::Missing, "no".into()],
        )
        .unwrap();
        let row = ex.to_f64_row();
        assert!(row[0].is_nan());
        assert!(row[1].is_nan());
        assert_eq!(row[2], 1.0);
    }

    #[test]
    fn wrong_length_rejected() {
        let err = Example::new(schema(), vec![23.0.into(), "Tue".into()]).unwrap_err();
        assert_eq!(err, DatasetError::LengthMismatch { expected: 3, got: 2 });
    }

    #[test]
    fn wrong_type_rejected() {
        let err = Example::new(schema(), vec!["Tue".into(), "Tue".into(), "yes".into()])
            .unwrap_err();
        assert!(matches!(err, DatasetError::TypeMismatch { index: 0, .. }));

        let err = Example::new(schema(), vec![1.0.into(), "Sun".into(), "yes".into()])
            .unwrap_err();
        match err {
            DatasetError::TypeMismatch { index, feature, expected, .. } => {
                assert_eq!(index, 1);
                assert_eq!(feature, "day");
                assert_eq!(expected, FeatureType::Discrete(vec!["Mon".into(), "Tue".into(), "Wed".into()]).to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn iteration_in_schema_order() {
        let ex = Example::new(schema(), vec![5.0.into(), "Mon".into(), "no".into()]).unwrap();
        let rendered: Vec<String> = ex.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, vec!["5", "Mon", "no"]);
        assert_eq!((&ex).into_iter().count(), 3);
    }
}
