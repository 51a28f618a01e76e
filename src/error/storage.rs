use std::path::PathBuf;
use thiserror::Error;

/// Failures of the flat-file persistence layer.
///
/// Every variant carries the path involved so log lines point at the broken file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file (or its directory) could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON for the expected shape.
    #[error("Malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The online record file does not contain an integer.
    #[error("Malformed online record in {path}: '{value}'")]
    InvalidRecord { path: PathBuf, value: String },
}
