//! Default configuration values.

use camino::Utf8PathBuf;

use crate::LogFormat;

/// File written by file-backed deliveries when no path is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "DataFile.txt";

/// Default log filter expression used by the binaries.
///
/// Kept at `warn` so the demos' console output is not interleaved with
/// routine telemetry on an interactive terminal.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default output file as an owned path.
#[must_use]
pub fn default_output_path() -> Utf8PathBuf {
    Utf8PathBuf::from(DEFAULT_OUTPUT_PATH)
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binaries.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
