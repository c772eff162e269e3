//! Error types for loading block documents

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read
    #[error("IO error reading {path}: {source}", path = .path.display())]
    Io {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid block JSON
    #[error("Invalid block JSON in {path}: {source}", path = .path.display())]
    Json {
        /// Path of the file being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
