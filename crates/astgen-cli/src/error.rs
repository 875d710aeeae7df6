use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make a generator run fail.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to read schema {}: {source}", .path.display())]
    ReadSchema { path: PathBuf, source: io::Error },

    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadExisting { path: PathBuf, source: io::Error },

    /// `text` is the schema the error points into, for rendering.
    #[error("{err}")]
    Schema {
        #[source]
        err: astgen_syntax::Error,
        text: String,
    },
}
