use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How telemetry events are rendered on stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    Json,
    /// Terse single-line text, the default for interactive runs.
    #[default]
    Compact,
}

impl LogFormat {
    /// Returns `true` for machine-readable output.
    #[must_use]
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn only_json_is_structured() {
        assert!(LogFormat::Json.is_structured());
        assert!(!LogFormat::Compact.is_structured());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(LogFormat::from_str("yaml").is_err());
    }
}
