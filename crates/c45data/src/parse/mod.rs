//! Readers for the C4.5 text format.
//!
//! A dataset is a pair of files:
//!
//! - `<name>.names`: one declaration per line, `name: type-spec`, where the
//!   spec is `continuous` or a comma-separated label list. The class may be
//!   declared as a bare label list without a name.
//! - `<name>.data`: one example per line, comma-separated, in schema order.
//!
//! In both files `//` and `|` start a comment, blank lines are ignored and a
//! single trailing period is dropped. See [`ParseOptions`] for the dialect
//! switches (class position, label column, missing-value token).

mod data;
mod error;
mod lines;
mod names;
mod options;

pub use data::parse_data;
pub use error::{ParseError, SchemaError};
pub use names::{parse_names, DEFAULT_CLASS_NAME};
pub use options::{ClassLocation, LabelColumn, ParseOptions, ParseOptionsBuilder};
