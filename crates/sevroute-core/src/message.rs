use serde::{Deserialize, Serialize};

use crate::Severity;

/// Immutable log entry pairing a [`Severity`] with its text payload.
///
/// Fields are private; once built a message is only ever read. Dispatchers
/// borrow it and never take ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LogMessage {
    severity: Severity,
    text: String,
}

impl LogMessage {
    /// Builds a message with the given severity and text.
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Shorthand for a [`Severity::Warning`] message.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Shorthand for a [`Severity::Error`] message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Shorthand for a [`Severity::FatalError`] message.
    #[must_use]
    pub fn fatal(text: impl Into<String>) -> Self {
        Self::new(Severity::FatalError, text)
    }

    /// Shorthand for a [`Severity::Unknown`] message.
    #[must_use]
    pub fn unknown(text: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, text)
    }

    /// Severity the message was tagged with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Text payload.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
