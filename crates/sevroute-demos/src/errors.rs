//! Error types surfaced by the demo runner.

use std::io;

use sevroute_chain::ChainError;
use sevroute_observer::ObserverError;
use sevroute_sink::SinkError;
use thiserror::Error;

use crate::TelemetryError;

/// Failures that abort a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Telemetry could not be installed.
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    /// The handler chain failed to deliver a message.
    #[error("chain dispatch failed: {0}")]
    Chain(#[from] ChainError),
    /// A print sink failed.
    #[error("print command failed: {0}")]
    Sink(#[from] SinkError),
    /// A subscriber failed to deliver an event.
    #[error("observer notification failed: {0}")]
    Observer(#[from] ObserverError),
    /// Reporting to stdout failed.
    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}
