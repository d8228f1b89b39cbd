//! Error types for sink deliveries.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors surfaced while delivering text to a destination.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The target file could not be created or truncated.
    #[error("failed to open {path} for writing: {source}")]
    Open {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// The target file was opened but the payload could not be written.
    #[error("failed to write to {path}: {source}")]
    Write {
        /// Path that rejected the write.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// The console writer rejected the payload.
    #[error("failed to write to console: {0}")]
    Console(#[source] io::Error),
}

impl SinkError {
    /// Creates an open error for the given path.
    pub fn open(path: &Utf8Path, source: io::Error) -> Self {
        Self::Open {
            path: path.to_owned(),
            source,
        }
    }

    /// Creates a write error for the given path.
    pub fn write(path: &Utf8Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_owned(),
            source,
        }
    }

    /// Returns the file path involved, if the failure concerned a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Open { path, .. } | Self::Write { path, .. } => Some(path.as_path()),
            Self::Console(_) => None,
        }
    }
}
