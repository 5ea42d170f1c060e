//! Report rendering errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The view is empty; nothing is written.
    #[error("no data to export")]
    NoData,

    /// The PDF could not be built in memory.
    #[error("failed to encode PDF: {0}")]
    Encode(String),

    /// The PDF could not be written to disk.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReportError {
    pub(crate) fn encode(err: impl core::fmt::Display) -> Self {
        Self::Encode(err.to_string())
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
