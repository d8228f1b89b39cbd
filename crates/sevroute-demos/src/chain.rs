//! Chain of Responsibility scenario.

use std::io::Write;

use sevroute_chain::{Chain, Handler, Outcome};
use sevroute_config::Config;
use sevroute_core::LogMessage;
use tracing::{info, warn};

use crate::{DEMO_TARGET, DemoError};

/// Links Fatal -> Error -> Warning -> Unknown and dispatches a warning, an
/// error and a fatal message in turn.
///
/// The first terminal condition is printed to `stdout` and ends the run;
/// the process still succeeds.
pub(crate) fn run<W: Write>(config: &Config, stdout: &mut W) -> Result<(), DemoError> {
    let messages = [
        LogMessage::warning("Just a warning"),
        LogMessage::error("The most common mistake."),
        LogMessage::fatal("Everything is broken!"),
    ];

    let mut chain = Chain::new();
    let fatal = chain.push(Handler::Fatal);
    let error = chain.push(Handler::error(config.output_path()));
    let warning = chain.push(Handler::Warning);
    let unknown = chain.push(Handler::Unknown);
    chain.set_next(fatal, error)?;
    chain.set_next(error, warning)?;
    chain.set_next(warning, unknown)?;

    for message in &messages {
        match chain.handle(fatal, message, stdout)? {
            Outcome::Consumed(handler) => {
                info!(target: DEMO_TARGET, %handler, severity = %message.severity(), "consumed");
            }
            Outcome::Dropped => {
                info!(target: DEMO_TARGET, severity = %message.severity(), "dropped");
            }
            Outcome::Terminal(condition) => {
                warn!(target: DEMO_TARGET, condition = %condition, "processing stopped");
                write!(stdout, "{condition}").map_err(DemoError::Report)?;
                stdout.flush().map_err(DemoError::Report)?;
                break;
            }
        }
    }
    Ok(())
}
