//! Handler variants and the side effect each one performs.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use sevroute_core::{LogMessage, Severity};
use sevroute_sink::{SinkError, write_console, write_file};
use strum::Display;

use crate::outcome::{Outcome, TerminalCondition, TerminalKind};

/// Labels a [`Handler`] variant without its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum HandlerKind {
    /// Handles [`Severity::Warning`].
    Warning,
    /// Handles [`Severity::Error`].
    Error,
    /// Handles [`Severity::FatalError`].
    Fatal,
    /// Handles [`Severity::Unknown`].
    Unknown,
}

/// A chain node's behaviour, bound to exactly one severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Prints warnings to the console, one per line.
    Warning,
    /// Rewrites `path` with the error text.
    Error {
        /// File replaced on every consumed error.
        path: Utf8PathBuf,
    },
    /// Turns fatal messages into a terminal condition.
    Fatal,
    /// Turns unknown messages into a terminal condition.
    Unknown,
}

impl Handler {
    /// Builds an error handler writing to `path`.
    pub fn error(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Error { path: path.into() }
    }

    /// Severity this handler consumes.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Warning => Severity::Warning,
            Self::Error { .. } => Severity::Error,
            Self::Fatal => Severity::FatalError,
            Self::Unknown => Severity::Unknown,
        }
    }

    /// Identifies the variant.
    #[must_use]
    pub const fn kind(&self) -> HandlerKind {
        match self {
            Self::Warning => HandlerKind::Warning,
            Self::Error { .. } => HandlerKind::Error,
            Self::Fatal => HandlerKind::Fatal,
            Self::Unknown => HandlerKind::Unknown,
        }
    }

    /// Returns the output file of an error handler.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Error { path } => Some(path.as_path()),
            Self::Warning | Self::Fatal | Self::Unknown => None,
        }
    }

    /// Consumes a message already known to match [`Self::severity`].
    pub(crate) fn consume<W: Write + ?Sized>(
        &self,
        message: &LogMessage,
        console: &mut W,
    ) -> Result<Outcome, SinkError> {
        match self {
            Self::Warning => {
                write_console(console, &format!("{}\n", message.text()))?;
                Ok(Outcome::Consumed(self.kind()))
            }
            Self::Error { path } => {
                write_file(path, message.text())?;
                Ok(Outcome::Consumed(self.kind()))
            }
            Self::Fatal => Ok(Outcome::Terminal(TerminalCondition::new(
                TerminalKind::Fatal,
                message.text(),
            ))),
            Self::Unknown => Ok(Outcome::Terminal(TerminalCondition::new(
                TerminalKind::Unknown,
                message.text(),
            ))),
        }
    }
}
