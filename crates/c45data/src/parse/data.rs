//! `.data` records file reader.

use std::sync::Arc;

use super::error::ParseError;
use super::lines::{content_lines, split_values};
use super::options::{LabelColumn, ParseOptions};
use crate::dataset::{Example, ExampleSet, FeatureValue, Schema, Sequence};

/// Read the text of a `.data` file into an [`ExampleSet`] over `schema`.
///
/// Every non-blank line (after comment stripping) is one example with exactly
/// `schema.len()` comma-separated fields. Reading stops at the first
/// malformed line; no partial set is ever returned.
///
/// With [`Parallelism::Parallel`](crate::Parallelism::Parallel) lines are
/// validated on the rayon pool. Example order and the reported error (the
/// first one in file order) are the same as in sequential mode.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use c45data::parse::{parse_data, parse_names, ParseOptions};
/// use c45data::Sequence;
///
/// let options = ParseOptions::default();
/// let schema = parse_names("x: continuous.\ny: a, b.\n", &options).unwrap();
/// let set = parse_data(Arc::new(schema), "1.5,a\n?,b\n", &options).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert!(set[1][0].is_missing());
/// ```
pub fn parse_data(
    schema: Arc<Schema>,
    text: &str,
    options: &ParseOptions,
) -> Result<ExampleSet, ParseError> {
    let read = |(line, record): (usize, &str)| read_record(&schema, line, record, options);

    let examples = if options.parallelism.is_parallel() {
        let lines: Vec<(usize, &str)> = content_lines(text).collect();
        options
            .parallelism
            .maybe_par_map(lines, read)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?
    } else {
        content_lines(text).map(read).collect::<Result<Vec<_>, _>>()?
    };

    tracing::debug!(n_examples = examples.len(), "parsed records");
    Ok(ExampleSet::from_validated(schema, examples))
}

/// Validate one cleaned record line.
fn read_record(
    schema: &Arc<Schema>,
    line: usize,
    record: &str,
    options: &ParseOptions,
) -> Result<Example, ParseError> {
    let mut fields: Vec<&str> = split_values(record).collect();
    if fields.len() != schema.len() {
        return Err(ParseError::FieldCount {
            line,
            expected: schema.len(),
            got: fields.len(),
            text: record.to_string(),
        });
    }

    if options.label_column == LabelColumn::First {
        fields.rotate_left(1);
    }

    let values = schema
        .iter()
        .zip(fields)
        .enumerate()
        .map(|(column, (meta, field))| {
            if field == options.missing_token {
                return Ok(FeatureValue::Missing);
            }
            meta.feature_type
                .coerce(field)
                .map_err(|reason| ParseError::InvalidValue {
                    line,
                    column,
                    feature: meta.name.clone(),
                    reason,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::trace!(line, "record accepted");
    Ok(Example::from_validated(Arc::clone(schema), values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{FeatureMeta, ValueError};
    use crate::utils::Parallelism;

    fn weather() -> Arc<Schema> {
        Arc::new(
            Schema::new(
                vec![
                    FeatureMeta::continuous("age"),
                    FeatureMeta::discrete("day", ["Mon", "Tue", "Wed"]),
                    FeatureMeta::binary("member"),
                ],
                FeatureMeta::discrete("outcome", ["yes", "no"]),
            )
            .unwrap(),
        )
    }

    fn parse(text: &str) -> Result<ExampleSet, ParseError> {
        parse_data(weather(), text, &ParseOptions::default())
    }

    #[test]
    fn reads_typed_values() {
        let set = parse("23, Tue, 1, yes.\n41,Mon,0,no\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0][0], FeatureValue::Continuous(23.0));
        assert_eq!(set[0][1], FeatureValue::Discrete("Tue".into()));
        assert_eq!(set[0][2], FeatureValue::Binary(true));
        assert_eq!(set[1].label().as_label(), Some("no"));
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let set = parse("// header\n\n23,Tue,1,yes\n| note\n   \n41,Mon,0,no // trailing\n").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_text_gives_empty_set() {
        let set = parse("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.schema().len(), 4);
    }

    #[test]
    fn missing_token_any_position() {
        let set = parse("?,?,?,?\n").unwrap();
        assert!(set[0].iter().all(FeatureValue::is_missing));
    }

    #[test]
    fn custom_missing_token() {
        let options = ParseOptions::builder().missing_token("NA").build();
        let set = parse_data(weather(), "NA,Tue,1,yes\n", &options).unwrap();
        assert!(set[0][0].is_missing());

        let err = parse_data(weather(), "?,Tue,1,yes\n", &options).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { reason: ValueError::InvalidNumber { .. }, .. }
        ));
    }

    #[test]
    fn label_column_first() {
        let options = ParseOptions::builder().label_column(LabelColumn::First).build();
        let set = parse_data(weather(), "yes,23,Tue,1\n", &options).unwrap();
        assert_eq!(set[0].label().as_label(), Some("yes"));
        assert_eq!(set[0][0].as_f64(), Some(23.0));
    }

    #[test]
    fn too_few_fields() {
        let err = parse("23,Tue,1,yes\n23,Tue,1\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::FieldCount {
                line: 2,
                expected: 4,
                got: 3,
                text: "23,Tue,1".into()
            }
        );
    }

    #[test]
    fn too_many_fields() {
        let err = parse("23,Tue,1,yes,extra\n").unwrap_err();
        assert!(matches!(err, ParseError::FieldCount { got: 5, .. }));
    }

    #[test]
    fn unknown_label_names_value_and_allowed_set() {
        let err = parse("\n23,Sun,1,yes\n").unwrap_err();
        match err {
            ParseError::InvalidValue {
                line,
                column,
                feature,
                reason: ValueError::UnknownLabel { value, allowed },
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 1);
                assert_eq!(feature, "day");
                assert_eq!(value, "Sun");
                assert_eq!(allowed, vec!["Mon", "Tue", "Wed"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_number_and_binary() {
        let err = parse("abc,Tue,1,yes\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { column: 0, reason: ValueError::InvalidNumber { .. }, .. }
        ));
        let err = parse("1,Tue,2,yes\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { column: 2, reason: ValueError::InvalidBinary { .. }, .. }
        ));
    }

    #[test]
    fn first_error_wins() {
        let text = "1,Tue,1,yes\n1,Tue\nbad,Tue,1,yes\n";
        let err = parse(text).unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn parallel_matches_sequential() {
        let text: String = (0..500)
            .map(|i| format!("{i},{},{},{}\n", ["Mon", "Tue", "Wed"][i % 3], i % 2, ["yes", "no"][i % 2]))
            .collect();
        let sequential = parse_data(weather(), &text, &ParseOptions::default()).unwrap();
        let options = ParseOptions::builder().parallelism(Parallelism::Parallel).build();
        let parallel = parse_data(weather(), &text, &options).unwrap();

        assert_eq!(parallel.len(), 500);
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn parallel_reports_first_error_in_file_order() {
        let mut text: String = (0..200).map(|i| format!("{i},Mon,0,yes\n")).collect();
        text.push_str("1,Sun,0,yes\n");
        text.push_str("1,Mon\n");
        let options = ParseOptions::builder().parallelism(Parallelism::Parallel).build();
        let err = parse_data(weather(), &text, &options).unwrap_err();
        assert_eq!(err.line(), 201);
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    #[test]
    fn examples_share_the_schema() {
        let schema = weather();
        let set = parse_data(Arc::clone(&schema), "1,Mon,0,yes\n", &ParseOptions::default()).unwrap();
        assert!(Arc::ptr_eq(set.schema(), &schema));
        assert!(Arc::ptr_eq(set[0].schema(), &schema));
    }
}
