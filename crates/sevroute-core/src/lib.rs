//! Shared message model for the severity-routed dispatch crates.
//!
//! Every dispatcher in the workspace (the handler chain, the print sinks and
//! the subscriber registry) routes the same value: a [`LogMessage`] tagged with
//! exactly one [`Severity`].

mod message;
mod severity;

pub use message::LogMessage;
pub use severity::{Severity, SeverityParseError};
