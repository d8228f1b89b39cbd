use std::fs::File;
use std::io::Write;

use camino::Utf8Path;
use tracing::debug;

use crate::{SINK_TARGET, SinkError};

/// Writes `text` verbatim to `writer` and flushes it.
///
/// # Errors
///
/// Returns [`SinkError::Console`] when the writer fails.
pub fn write_console<W: Write + ?Sized>(writer: &mut W, text: &str) -> Result<(), SinkError> {
    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(SinkError::Console)?;
    debug!(target: SINK_TARGET, bytes = text.len(), "delivered to console");
    Ok(())
}

/// Replaces the contents of `path` with `text`.
///
/// The file is created when missing and truncated otherwise. The handle is
/// dropped before returning.
///
/// # Errors
///
/// Returns [`SinkError::Open`] when the file cannot be created and
/// [`SinkError::Write`] when the payload cannot be written.
pub fn write_file(path: &Utf8Path, text: &str) -> Result<(), SinkError> {
    let mut file = File::create(path).map_err(|source| SinkError::open(path, source))?;
    file.write_all(text.as_bytes())
        .map_err(|source| SinkError::write(path, source))?;
    debug!(target: SINK_TARGET, path = %path, bytes = text.len(), "delivered to file");
    Ok(())
}
