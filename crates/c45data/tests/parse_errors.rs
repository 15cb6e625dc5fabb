//! Error reporting for malformed schema and record files.

use rstest::rstest;

use c45data::{parse_c45, LoadError, ParseError, ParseOptions, SchemaError, ValueError};

const WEATHER_NAMES: &str = "\
age: continuous.
day: (Mon, Tue, Wed).
outcome: (yes, no).
";

fn parse_records(data: &str) -> ParseError {
    match parse_c45(WEATHER_NAMES, data, &ParseOptions::default()).unwrap_err() {
        LoadError::Parse(err) => err,
        other => panic!("expected a record error, got: {other:?}"),
    }
}

fn parse_schema(names: &str) -> SchemaError {
    match parse_c45(names, "", &ParseOptions::default()).unwrap_err() {
        LoadError::Schema(err) => err,
        other => panic!("expected a schema error, got: {other:?}"),
    }
}

#[test]
fn one_field_short() {
    let err = parse_records("23,Tue,yes\n23,Tue\n");
    assert_eq!(err.line(), 2);
    assert!(matches!(err, ParseError::FieldCount { expected: 3, got: 2, .. }));
    assert!(err.to_string().contains("expected 3 fields"), "{err}");
}

#[test]
fn label_outside_allowed_set() {
    let err = parse_records("23,Tue,maybe\n");
    let msg = err.to_string();
    assert!(msg.contains("'maybe'"), "{msg}");
    assert!(msg.contains("{yes, no}"), "{msg}");
    assert!(msg.contains("outcome"), "{msg}");
}

#[rstest]
#[case::not_a_number("x,Tue,yes", 0)]
#[case::unknown_day("1,Fri,yes", 1)]
#[case::unknown_label("1,Mon,perhaps", 2)]
#[case::wrong_case("1,mon,yes", 1)]
fn invalid_value_column(#[case] line: &str, #[case] column: usize) {
    match parse_records(line) {
        ParseError::InvalidValue { column: got, line: 1, .. } => assert_eq!(got, column),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn first_bad_line_is_reported() {
    let data = "1,Mon,yes\n// comment\n\n2,Fri,yes\n3,Mon\n";
    let err = parse_records(data);
    assert_eq!(err.line(), 4);
    assert!(matches!(
        err,
        ParseError::InvalidValue { reason: ValueError::UnknownLabel { .. }, .. }
    ));
}

#[rstest]
#[case::empty("", None)]
#[case::unknown_keyword("age: numeric.\ny: a, b.\n", Some(1))]
#[case::missing_separator("yes, no.\nage: continuous.\nno separator here, really.\n", Some(3))]
#[case::duplicate_name("a: continuous.\na: continuous.\ny: a, b.\n", Some(2))]
#[case::duplicate_label("y: a, b, a.\n", Some(1))]
#[case::bad_class_line_first("yes.\nage: bogus.\n", Some(1))]
#[case::duplicate_before_bad_type("a: continuous.\na: continuous.\nb: bogus.\n", Some(2))]
#[case::bad_type_before_empty_name("a: bogus.\n: x, y.\ny: a, b.\n", Some(1))]
fn schema_error_lines(#[case] names: &str, #[case] line: Option<usize>) {
    assert_eq!(parse_schema(names).line(), line);
}

#[test]
fn schema_error_messages_carry_text() {
    let err = parse_schema("age: numeric.\ny: a, b.\n");
    assert_eq!(err.to_string(), "line 1: unknown type 'numeric' for feature 'age'");

    let err = parse_schema("yes, no.\nred, blue.\n");
    assert_eq!(err.to_string(), "line 2: expected 'name: type' but found 'red, blue'");
}

#[test]
fn schema_error_carries_offending_line() {
    let err = parse_schema("a: continuous.\na: (x, y).\nb: bogus.\n");
    assert!(matches!(err, SchemaError::DuplicateName { line: 2, .. }));
    assert_eq!(err.text(), Some("a: (x, y)"));
}

#[test]
fn schema_errors_come_before_record_errors() {
    let err = parse_c45("age: bogus.\n", "not,even,close\n", &ParseOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Schema(_)));
}
