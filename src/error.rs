use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for outline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or printing an outline
#[derive(Error, Debug)]
pub enum Error {
    /// A document or configuration file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration JSON is malformed
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// A heading exclude pattern is not a valid regex
    #[error("invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A structure could not be serialized to JSON
    #[error("failed to serialize structure: {0}")]
    Json(#[source] serde_json::Error),

    /// Writing the report failed
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
