//! Observer scenario.

use std::io::Write;

use sevroute_config::Config;
use sevroute_observer::{Registry, Subscriber};
use tracing::info;

use crate::{DEMO_TARGET, DemoError};

/// Registers console, file and fatal subscribers, then publishes a warning.
pub(crate) fn run<W: Write>(config: &Config, stdout: &mut W) -> Result<(), DemoError> {
    let mut registry = Registry::new();
    registry.add_observer(Subscriber::Console);
    registry.add_observer(Subscriber::file(config.output_path()));
    registry.add_observer(Subscriber::fatal(config.output_path()));

    let notification = registry.warning("My Warning!", stdout)?;
    info!(
        target: DEMO_TARGET,
        event = %notification.event(),
        delivered = notification.delivered_to().len(),
        "warning published"
    );
    Ok(())
}
