//! Dispatch outcomes.

use std::fmt;

use sevroute_core::Severity;

use crate::HandlerKind;

/// Result of offering a message to a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// A handler delivered the message.
    Consumed(HandlerKind),
    /// No handler matched and the severity does not end processing.
    Dropped,
    /// Processing of the current attempt must stop.
    Terminal(TerminalCondition),
}

impl Outcome {
    /// Returns the terminal condition, if any.
    #[must_use]
    pub const fn terminal(&self) -> Option<&TerminalCondition> {
        match self {
            Self::Terminal(condition) => Some(condition),
            Self::Consumed(_) | Self::Dropped => None,
        }
    }
}

/// Which terminal severity was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    /// Raised for [`Severity::FatalError`].
    Fatal,
    /// Raised for [`Severity::Unknown`].
    Unknown,
}

impl TerminalKind {
    /// Maps a severity onto its terminal kind, if it has one.
    #[must_use]
    pub const fn for_severity(severity: Severity) -> Option<Self> {
        match severity {
            Severity::FatalError => Some(Self::Fatal),
            Severity::Unknown => Some(Self::Unknown),
            Severity::Warning | Severity::Error => None,
        }
    }
}

/// A fatal or unknown message that stopped processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCondition {
    kind: TerminalKind,
    text: String,
}

impl TerminalCondition {
    /// Builds a condition of `kind` carrying the message text.
    #[must_use]
    pub fn new(kind: TerminalKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Which severity raised the condition.
    #[must_use]
    pub const fn kind(&self) -> TerminalKind {
        self.kind
    }

    /// Text of the originating message.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for TerminalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TerminalKind::Fatal => write!(f, "Fatal error: {}", self.text),
            TerminalKind::Unknown => write!(f, "Unknown message: {}", self.text),
        }
    }
}
