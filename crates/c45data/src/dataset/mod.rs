//! Typed data model for C4.5 datasets.
//!
//! # Overview
//!
//! - [`Schema`]: ordered feature declarations, the class label always last
//! - [`Example`]: one value per schema entry
//! - [`ExampleSet`]: examples sharing one schema, convertible to a numeric matrix
//! - [`Sequence`]: indexing and iteration shared by all three
//!
//! Values are validated against their [`FeatureType`] when an example is
//! built, so a constructed [`ExampleSet`] is always consistent with its schema.

mod error;
mod example;
mod example_set;
mod schema;
mod sequence;
mod value;

pub use error::{DatasetError, ValueError};
pub use example::Example;
pub use example_set::ExampleSet;
pub use schema::{FeatureMeta, Schema};
pub use sequence::Sequence;
pub use value::{FeatureType, FeatureValue};

