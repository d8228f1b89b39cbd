//! Command-line and environment loading.

use std::ffi::OsString;

use camino::Utf8PathBuf;
use clap::Parser;
use clap::error::ErrorKind;
use thiserror::Error;

use crate::{Config, LogFormat};

/// Ambient flags accepted by every demo binary.
///
/// Each flag falls back to its `SEVROUTE_*` environment variable and then to
/// the crate defaults.
#[derive(Parser, Debug, Default, Clone)]
#[command(version, about = "Severity-routed log dispatch demo")]
pub struct ConfigArgs {
    /// File rewritten by file-backed deliveries.
    #[arg(long, env = "SEVROUTE_OUTPUT_PATH", value_name = "PATH")]
    pub output_path: Option<Utf8PathBuf>,
    /// Telemetry filter expression (for example `debug` or `sevroute_chain=trace`).
    #[arg(long, env = "SEVROUTE_LOG_FILTER", value_name = "FILTER")]
    pub log_filter: Option<String>,
    /// Telemetry output format (`json` or `compact`).
    #[arg(long, env = "SEVROUTE_LOG_FORMAT", value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,
}

impl ConfigArgs {
    /// Parses flags from an explicit argument list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Usage`] when clap rejects the arguments or the
    /// caller asked for help or version output.
    pub fn parse_from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(ConfigError::Usage)
    }

    /// Layers the parsed flags over the defaults.
    #[must_use]
    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            output_path: self.output_path.unwrap_or(defaults.output_path),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
            log_format: self.log_format.unwrap_or(defaults.log_format),
        }
    }
}

/// Errors encountered while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Argument parsing failed or produced help/version output.
    #[error("{0}")]
    Usage(clap::Error),
}

impl ConfigError {
    /// Returns `true` when the error carries help or version text rather than
    /// a genuine failure.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        match self {
            Self::Usage(error) => matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ),
        }
    }

    /// Process exit status matching the error.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        if self.is_informational() { 0 } else { 2 }
    }
}
