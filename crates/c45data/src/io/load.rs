//! Locating and loading `<name>.names` / `<name>.data` pairs from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::dataset::ExampleSet;
use crate::parse::{parse_data, parse_names, ParseError, ParseOptions, SchemaError};

/// Extension of schema files.
pub const NAMES_EXTENSION: &str = "names";
/// Extension of record files.
pub const DATA_EXTENSION: &str = "data";

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("'{file}' not found under {}", root.display())]
    NotFound { file: String, root: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Find the first file called `file_name` below `root`.
///
/// The tree is walked top-down: the files of a directory are checked before
/// any of its subdirectories, and subdirectories are visited in name order.
/// Symlinked directories are not descended into and unreadable directories
/// are skipped.
pub fn find_file(root: impl AsRef<Path>, file_name: &str) -> Option<PathBuf> {
    let mut pending = vec![root.as_ref().to_path_buf()];

    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            tracing::trace!(dir = %dir.display(), "skipping unreadable directory");
            continue;
        };

        let mut entries: Vec<fs::DirEntry> = entries.filter_map(Result::ok).collect();
        entries.sort_by_key(|entry| entry.file_name());

        let mut subdirs = Vec::new();
        for entry in entries {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                subdirs.push(entry.path());
            } else if entry.file_name() == file_name && entry.path().is_file() {
                return Some(entry.path());
            }
        }

        // Stack order: first subdirectory is popped first.
        pending.extend(subdirs.into_iter().rev());
    }
    None
}

/// Paths of the two files making up one dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetFiles {
    pub names: PathBuf,
    pub data: PathBuf,
}

impl DatasetFiles {
    /// Search `root` for `<name>.names` and `<name>.data`.
    ///
    /// The two files are searched independently and may live in different
    /// directories.
    pub fn locate(name: &str, root: impl AsRef<Path>) -> Result<Self, LoadError> {
        let root = root.as_ref();
        let find = |extension: &str| {
            let file = format!("{name}.{extension}");
            find_file(root, &file).ok_or_else(|| LoadError::NotFound {
                file,
                root: root.to_path_buf(),
            })
        };

        let files = Self {
            names: find(NAMES_EXTENSION)?,
            data: find(DATA_EXTENSION)?,
        };
        tracing::debug!(
            names = %files.names.display(),
            data = %files.data.display(),
            "located dataset"
        );
        Ok(files)
    }

    /// Read and parse both files.
    pub fn load(&self, options: &ParseOptions) -> Result<ExampleSet, LoadError> {
        let names = read_text(&self.names)?;
        let data = read_text(&self.data)?;
        parse_c45(&names, &data, options)
    }
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Shorthand for [`DatasetFiles::locate`].
pub fn locate_dataset(name: &str, root: impl AsRef<Path>) -> Result<DatasetFiles, LoadError> {
    DatasetFiles::locate(name, root)
}

/// Parse a dataset from the contents of its two files.
pub fn parse_c45(
    names_text: &str,
    data_text: &str,
    options: &ParseOptions,
) -> Result<ExampleSet, LoadError> {
    let schema = parse_names(names_text, options)?;
    Ok(parse_data(Arc::new(schema), data_text, options)?)
}

/// Locate `<name>.names` and `<name>.data` below `root` and parse them.
///
/// # Example
///
/// ```no_run
/// use c45data::io::load_c45;
/// use c45data::parse::ParseOptions;
///
/// let set = load_c45("weather", "datasets", &ParseOptions::default())?;
/// let matrix = set.to_numeric_matrix();
/// # Ok::<(), c45data::io::LoadError>(())
/// ```
pub fn load_c45(
    name: &str,
    root: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<ExampleSet, LoadError> {
    DatasetFiles::locate(name, root)?.load(options)
}
