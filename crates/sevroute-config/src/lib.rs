//! Shared configuration for the severity dispatch demos.
//!
//! Configuration only covers ambient concerns: where file-backed deliveries
//! write, and how telemetry is filtered and formatted. Routing itself is fixed
//! by each demo. Values come from command-line flags, then `SEVROUTE_*`
//! environment variables, then the defaults in [`defaults`].

pub mod defaults;
mod loader;
mod logging;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

pub use loader::{ConfigArgs, ConfigError};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration shared by the demo binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// File rewritten by file-backed handlers, sinks and subscribers.
    pub output_path: Utf8PathBuf,
    /// `tracing_subscriber::EnvFilter` expression.
    pub log_filter: String,
    /// Telemetry output format.
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: defaults::default_output_path(),
            log_filter: defaults::default_log_filter_string(),
            log_format: defaults::default_log_format(),
        }
    }
}

impl Config {
    /// Loads configuration from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the arguments cannot be parsed, including
    /// the informational `--help` and `--version` requests.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_iter(std::env::args_os())
    }

    /// Loads configuration from an explicit argument list.
    ///
    /// The first item is treated as the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the arguments cannot be parsed.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        ConfigArgs::parse_from_iter(args).map(ConfigArgs::into_config)
    }

    /// File rewritten by file-backed deliveries.
    #[must_use]
    pub fn output_path(&self) -> &Utf8Path {
        &self.output_path
    }

    /// Telemetry filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Telemetry output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }
}
