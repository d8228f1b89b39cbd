//! Print destinations invoked uniformly through a single `print` operation.
//!
//! A [`Sink`] is either console-backed (any [`std::io::Write`], stdout in the
//! demo binaries) or file-backed. File sinks open their path in truncate mode
//! for every print and close it before returning, so the file always holds the
//! most recent payload and nothing else.
//!
//! The lower-level [`write_console`] and [`write_file`] helpers are shared by
//! the handler chain and the subscriber registry, which deliver to the same
//! two kinds of destination.

mod deliver;
mod error;
mod sink;

pub use deliver::{write_console, write_file};
pub use error::SinkError;
pub use sink::{Sink, SinkKind, print_all};

/// Tracing target for sink deliveries.
pub(crate) const SINK_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::sink");
