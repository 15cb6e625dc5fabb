//! Named numeric matrix export to Arrow IPC (Feather) files.
//!
//! A [`NamedMatrix`] is written as a single record batch with one
//! non-nullable `Float64` column per matrix column. Column names are the
//! schema's feature names (label last) and the matrix name is stored in the
//! schema metadata under [`NAME_METADATA_KEY`]. Missing values stay `NaN`.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array};
use arrow::datatypes::{DataType, Field, Schema as ArrowSchema};
use arrow::error::ArrowError;
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use ndarray::Array2;

use crate::dataset::ExampleSet;

/// Schema metadata key holding the matrix name.
pub const NAME_METADATA_KEY: &str = "name";

/// File extension used for exported matrices.
pub const IPC_EXTENSION: &str = "arrow";

/// Errors that can occur when exporting or re-reading a matrix.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("matrix name must not be empty")]
    EmptyName,

    #[error("matrix has {got} columns but {expected} column names were given")]
    ColumnCount { expected: usize, got: usize },

    #[error(transparent)]
    Arrow(#[from] ArrowError),

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid matrix file: {0}")]
    Invalid(String),
}

/// A numeric matrix tagged with a name and per-column names.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedMatrix {
    name: String,
    columns: Vec<String>,
    data: Array2<f64>,
}

impl NamedMatrix {
    /// # Errors
    ///
    /// [`ExportError::EmptyName`] for an empty name and
    /// [`ExportError::ColumnCount`] if `columns` does not match the matrix width.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        data: Array2<f64>,
    ) -> Result<Self, ExportError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ExportError::EmptyName);
        }
        if columns.len() != data.ncols() {
            return Err(ExportError::ColumnCount {
                expected: columns.len(),
                got: data.ncols(),
            });
        }
        Ok(Self {
            name,
            columns,
            data,
        })
    }

    /// Numeric matrix of `set`, with the schema names as column names.
    pub fn from_example_set(name: impl Into<String>, set: &ExampleSet) -> Result<Self, ExportError> {
        let columns = set.schema().names().map(str::to_string).collect();
        Self::new(name, columns, set.to_numeric_matrix())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn into_data(self) -> Array2<f64> {
        self.data
    }

    fn arrow_schema(&self) -> ArrowSchema {
        let fields: Vec<Field> = self
            .columns
            .iter()
            .map(|name| Field::new(name, DataType::Float64, false))
            .collect();
        let metadata = HashMap::from([(NAME_METADATA_KEY.to_string(), self.name.clone())]);
        ArrowSchema::new(fields).with_metadata(metadata)
    }

    /// Convert to a single Arrow record batch.
    pub fn to_record_batch(&self) -> Result<RecordBatch, ExportError> {
        let schema = Arc::new(self.arrow_schema());
        let arrays: Vec<ArrayRef> = self
            .data
            .columns()
            .into_iter()
            .map(|col| Arc::new(Float64Array::from(col.to_vec())) as ArrayRef)
            .collect();
        let options = RecordBatchOptions::new().with_row_count(Some(self.data.nrows()));
        Ok(RecordBatch::try_new_with_options(schema, arrays, &options)?)
    }

    /// Write an Arrow IPC file to `writer`.
    pub fn write_ipc<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let batch = self.to_record_batch()?;
        let mut ipc_writer = FileWriter::try_new(writer, &batch.schema())?;
        ipc_writer.write(&batch)?;
        ipc_writer.finish()?;
        Ok(())
    }

    /// Write an Arrow IPC file at `path`, replacing any existing file.
    pub fn write_ipc_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_ipc(BufWriter::new(file))?;
        tracing::debug!(
            path = %path.display(),
            name = %self.name,
            rows = self.data.nrows(),
            cols = self.data.ncols(),
            "wrote matrix"
        );
        Ok(())
    }

    /// Read a matrix previously written by [`write_ipc`](Self::write_ipc).
    ///
    /// Nullable `Float64` columns are accepted too; null entries become `NaN`.
    pub fn read_ipc<R: Read + Seek>(reader: R) -> Result<Self, ExportError> {
        let reader = FileReader::try_new(reader, None)?;
        let schema = reader.schema();
        let name = schema
            .metadata()
            .get(NAME_METADATA_KEY)
            .cloned()
            .ok_or_else(|| ExportError::Invalid(format!("missing '{NAME_METADATA_KEY}' metadata")))?;
        let columns: Vec<String> = schema.fields().iter().map(|f| f.name().clone()).collect();

        let batches = reader.collect::<Result<Vec<_>, _>>()?;
        let n_rows: usize = batches.iter().map(|b| b.num_rows()).sum();

        let mut data = Array2::from_elem((n_rows, columns.len()), f64::NAN);
        let mut offset = 0;
        for batch in &batches {
            for (j, column) in batch.columns().iter().enumerate() {
                let values = column
                    .as_any()
                    .downcast_ref::<Float64Array>()
                    .ok_or_else(|| {
                        ExportError::Invalid(format!(
                            "column '{}' has type {}, expected Float64",
                            columns[j],
                            column.data_type()
                        ))
                    })?;
                // nulls from other writers read as missing
                for (i, v) in values.iter().enumerate() {
                    data[[offset + i, j]] = v.unwrap_or(f64::NAN);
                }
            }
            offset += batch.num_rows();
        }

        Self::new(name, columns, data)
    }

    /// Read a matrix file from `path`.
    pub fn read_ipc_file(path: impl AsRef<Path>) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_ipc(BufReader::new(file))
    }
}
