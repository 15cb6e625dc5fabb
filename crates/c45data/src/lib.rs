//! c45data: typed reader for C4.5 `.names` / `.data` datasets.
//!
//! Parses the schema and records of a C4.5 dataset into a validated, typed
//! in-memory representation and converts it into a numeric matrix.
//!
//! # Key Types
//!
//! - [`Schema`] / [`FeatureMeta`] / [`FeatureType`] - Declared features, label last
//! - [`Example`] / [`ExampleSet`] - Validated records
//! - [`ParseOptions`] - Dialect switches for both readers
//! - [`NamedMatrix`] - Numeric matrix export (Arrow IPC)
//!
//! # Loading
//!
//! Use [`load_c45`] to find and parse `<name>.names` and `<name>.data`
//! below a directory, or [`parse_c45`] on in-memory text.
//!
//! ```
//! use c45data::{parse_c45, ParseOptions, Sequence};
//!
//! let names = "age: continuous.\nday: (Mon, Tue, Wed).\noutcome: (yes, no).\n";
//! let set = parse_c45(names, "23,Tue,yes\n", &ParseOptions::default()).unwrap();
//!
//! assert_eq!(set.len(), 1);
//! assert_eq!(set.to_numeric_matrix().row(0).to_vec(), vec![23.0, 1.0, 0.0]);
//! ```

pub mod dataset;
pub mod io;
pub mod parse;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use dataset::{
    DatasetError, Example, ExampleSet, FeatureMeta, FeatureType, FeatureValue, Schema, Sequence,
    ValueError,
};
pub use io::{load_c45, parse_c45, ExportError, LoadError, NamedMatrix};
pub use parse::{ClassLocation, LabelColumn, ParseError, ParseOptions, SchemaError};
pub use utils::{run_with_threads, Parallelism};
