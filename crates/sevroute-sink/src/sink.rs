//! The print destinations themselves.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use strum::Display;
use tracing::trace;

use crate::deliver::{write_console, write_file};
use crate::{SINK_TARGET, SinkError};

/// Labels a [`Sink`] variant for telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SinkKind {
    /// Writes to a console stream.
    Console,
    /// Overwrites a file.
    File,
}

/// A destination that accepts a string and delivers it.
#[derive(Debug)]
pub enum Sink<W> {
    /// Delivers to a console stream such as stdout.
    Console(W),
    /// Delivers by truncating and rewriting the file at `path`.
    File {
        /// Destination file.
        path: Utf8PathBuf,
    },
}

impl<W: Write> Sink<W> {
    /// Builds a console sink around `writer`.
    pub const fn console(writer: W) -> Self {
        Self::Console(writer)
    }

    /// Builds a file sink targeting `path`.
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Identifies which variant this sink is.
    #[must_use]
    pub const fn kind(&self) -> SinkKind {
        match self {
            Self::Console(_) => SinkKind::Console,
            Self::File { .. } => SinkKind::File,
        }
    }

    /// Returns the target path of a file sink.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Console(_) => None,
            Self::File { path } => Some(path.as_path()),
        }
    }

    /// Delivers `text` verbatim to the destination.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the console or file rejects the payload.
    pub fn print(&mut self, text: &str) -> Result<(), SinkError> {
        trace!(target: SINK_TARGET, sink = %self.kind(), "printing");
        match self {
            Self::Console(writer) => write_console(writer, text),
            Self::File { path } => write_file(path, text),
        }
    }

    /// Consumes the sink and returns the console writer, if any.
    pub fn into_console(self) -> Option<W> {
        match self {
            Self::Console(writer) => Some(writer),
            Self::File { .. } => None,
        }
    }
}

/// Prints `text` to every sink in order.
///
/// # Errors
///
/// Stops at and returns the first delivery failure; later sinks are not
/// invoked.
pub fn print_all<W: Write>(sinks: &mut [Sink<W>], text: &str) -> Result<(), SinkError> {
    sinks.iter_mut().try_for_each(|sink| sink.print(text))
}

#[cfg(test)]
mod tests;
