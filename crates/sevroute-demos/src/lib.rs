//! Demo programs for the severity dispatch crates.
//!
//! Each binary runs one fixed scenario against stdout and the configured
//! output file:
//!
//! - `chain-demo` links Fatal, Error, Warning and Unknown handlers and feeds
//!   them a warning, an error and a fatal message. The fatal message ends the
//!   run and its condition is printed.
//! - `command-demo` prints one line through a console sink and a file sink.
//! - `observer-demo` registers console, file and fatal subscribers and
//!   publishes a warning.
//!
//! Console deliveries are the only thing written to stdout. Telemetry goes to
//! stderr, filtered by the configured expression.

mod chain;
mod command;
mod errors;
mod observer;
mod runner;
pub mod telemetry;

pub use errors::DemoError;
pub use runner::{Demo, run, run_with};
pub use telemetry::{TelemetryError, TelemetryHandle};

/// Tracing target for demo orchestration.
pub(crate) const DEMO_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::demo");
