//! File system entry points: locating and loading datasets, exporting matrices.

mod export;
mod load;

pub use export::{ExportError, NamedMatrix, IPC_EXTENSION, NAME_METADATA_KEY};
pub use load::{
    find_file, load_c45, locate_dataset, parse_c45, DatasetFiles, LoadError, DATA_EXTENSION,
    NAMES_EXTENSION,
};
