//! Command scenario.

use std::io::Write;

use sevroute_config::Config;
use sevroute_sink::{Sink, print_all};
use tracing::info;

use crate::{DEMO_TARGET, DemoError};

/// Line printed through every sink.
pub(crate) const COMMAND_TEXT: &str = "Command is everywhere!..I hope so...\n";

/// Prints [`COMMAND_TEXT`] through a console sink and a file sink.
pub(crate) fn run<W: Write>(config: &Config, stdout: &mut W) -> Result<(), DemoError> {
    let mut sinks = vec![Sink::console(stdout), Sink::file(config.output_path())];
    print_all(&mut sinks, COMMAND_TEXT)?;
    info!(target: DEMO_TARGET, sinks = sinks.len(), "command printed");
    Ok(())
}
