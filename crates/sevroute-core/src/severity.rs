use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Classification carried by every [`crate::LogMessage`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Severity {
    /// Recoverable condition worth surfacing to an operator.
    Warning,
    /// Ordinary failure recorded for later inspection.
    Error,
    /// Failure that must stop the current processing attempt.
    FatalError,
    /// Message whose classification is not recognised.
    Unknown,
}

/// Errors encountered while parsing a [`Severity`] from text.
pub type SeverityParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case::warning("warning", Severity::Warning)]
    #[case::error_upper("ERROR", Severity::Error)]
    #[case::fatal("fatal_error", Severity::FatalError)]
    #[case::fatal_mixed("Fatal_Error", Severity::FatalError)]
    #[case::unknown("unknown", Severity::Unknown)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(Severity::from_str(input).expect("parse severity"), expected);
    }

    #[test]
    fn rejects_unrecognised_names() {
        assert!(Severity::from_str("critical").is_err());
    }

    #[test]
    fn display_matches_parse() {
        for severity in Severity::iter() {
            let rendered = severity.to_string();
            assert_eq!(Severity::from_str(&rendered).expect("round trip"), severity);
        }
    }
}
