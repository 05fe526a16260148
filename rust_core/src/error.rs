//! Errors raised by the administrative import/export paths.
//!
//! Lookups never fail: an unresolved team is `None` or `mapped: false`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    /// Payload could not be parsed into a list of team aliases.
    #[error("malformed team mapping payload: {0}")]
    Format(String),

    #[error("team mapping file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::Format(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MappingError>;
