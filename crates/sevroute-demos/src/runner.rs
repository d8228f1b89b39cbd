//! Shared entry point for the demo binaries.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use sevroute_config::Config;
use strum::Display;
use tracing::{error, info};

use crate::{DEMO_TARGET, DemoError, chain, command, observer, telemetry};

/// The fixed scenarios shipped as binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Demo {
    /// Chain of Responsibility (`chain-demo`).
    Chain,
    /// Command (`command-demo`).
    Command,
    /// Observer (`observer-demo`).
    Observer,
}

impl Demo {
    /// Runs the scenario, writing console deliveries to `stdout`.
    ///
    /// # Errors
    ///
    /// Returns a [`DemoError`] when a delivery or report write fails.
    pub fn execute<W: Write>(self, config: &Config, stdout: &mut W) -> Result<(), DemoError> {
        info!(target: DEMO_TARGET, demo = %self, output = %config.output_path(), "starting demo");
        match self {
            Self::Chain => chain::run(config, stdout),
            Self::Command => command::run(config, stdout),
            Self::Observer => observer::run(config, stdout),
        }
    }
}

/// Runs `demo` against the process arguments and standard streams.
#[must_use]
pub fn run(demo: Demo) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run_with(demo, std::env::args_os(), &mut stdout, &mut stderr)
}

/// Runs `demo` with explicit arguments and streams.
///
/// Loads configuration, installs telemetry and executes the scenario.
/// Help and version requests print to `stdout` and succeed; any other failure
/// is reported on `stderr` with a non-zero status.
#[must_use]
pub fn run_with<I, T, W, E>(demo: Demo, args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let config = match Config::load_from_iter(args) {
        Ok(config) => config,
        Err(error) => {
            if error.is_informational() {
                let _ = write!(stdout, "{error}");
            } else {
                let _ = write!(stderr, "{error}");
            }
            return ExitCode::from(error.exit_status());
        }
    };

    let result = telemetry::initialise(&config)
        .map_err(DemoError::from)
        .and_then(|_| demo.execute(&config, stdout));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            error!(target: DEMO_TARGET, demo = %demo, error = %failure, "demo failed");
            let _ = writeln!(stderr, "{demo}: {failure}");
            ExitCode::FAILURE
        }
    }
}
