//! Subscriber variants and their callbacks.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use sevroute_core::Severity;
use sevroute_sink::{SinkError, write_console, write_file};
use strum::Display;

/// Notifications a registry can publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Event {
    /// Published by [`crate::Registry::warning`].
    Warning,
    /// Published by [`crate::Registry::error`].
    Error,
    /// Published by [`crate::Registry::fatal_error`].
    FatalError,
}

impl Event {
    /// Severity the event corresponds to.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Warning => Severity::Warning,
            Self::Error => Severity::Error,
            Self::FatalError => Severity::FatalError,
        }
    }
}

/// A registered recipient of severity events.
///
/// Each variant reacts to exactly one event; the other callbacks do nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscriber {
    /// Echoes warnings to the console.
    Console,
    /// Rewrites `path` with each error.
    File {
        /// File replaced on every error.
        path: Utf8PathBuf,
    },
    /// Echoes fatal errors to the console and rewrites `path` with them.
    Fatal {
        /// File replaced on every fatal error.
        path: Utf8PathBuf,
    },
}

impl Subscriber {
    /// Builds a file subscriber writing to `path`.
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::File { path: path.into() }
    }

    /// Builds a fatal subscriber writing to `path`.
    pub fn fatal(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Fatal { path: path.into() }
    }

    /// Returns the file written by the variant, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Console => None,
            Self::File { path } | Self::Fatal { path } => Some(path.as_path()),
        }
    }

    /// Warning callback.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the console rejects the text.
    pub fn on_warning<W: Write + ?Sized>(
        &self,
        message: &str,
        console: &mut W,
    ) -> Result<bool, SinkError> {
        match self {
            Self::Console => write_console(console, message).map(|()| true),
            Self::File { .. } | Self::Fatal { .. } => Ok(false),
        }
    }

    /// Error callback.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the file cannot be rewritten.
    pub fn on_error(&self, message: &str) -> Result<bool, SinkError> {
        match self {
            Self::File { path } => write_file(path, message).map(|()| true),
            Self::Console | Self::Fatal { .. } => Ok(false),
        }
    }

    /// Fatal error callback.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the console or the file rejects the text.
    pub fn on_fatal_error<W: Write + ?Sized>(
        &self,
        message: &str,
        console: &mut W,
    ) -> Result<bool, SinkError> {
        match self {
            Self::Fatal { path } => {
                write_console(console, message)?;
                write_file(path, message)?;
                Ok(true)
            }
            Self::Console | Self::File { .. } => Ok(false),
        }
    }

    /// Invokes the callback matching `event`.
    ///
    /// Returns whether the subscriber acted on the event.
    ///
    /// # Errors
    ///
    /// Propagates the callback's [`SinkError`].
    pub fn notify<W: Write + ?Sized>(
        &self,
        event: Event,
        message: &str,
        console: &mut W,
    ) -> Result<bool, SinkError> {
        match event {
            Event::Warning => self.on_warning(message, console),
            Event::Error => self.on_error(message),
            Event::FatalError => self.on_fatal_error(message, console),
        }
    }
}
