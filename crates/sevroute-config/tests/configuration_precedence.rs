//! Integration tests covering how flags layer over the defaults.

use camino::Utf8PathBuf;
use rstest::rstest;
use sevroute_config::{Config, LogFormat, defaults};

#[test]
fn defaults_target_data_file() {
    let config = Config::default();
    assert_eq!(config.output_path().as_str(), defaults::DEFAULT_OUTPUT_PATH);
    assert_eq!(config.log_filter(), defaults::DEFAULT_LOG_FILTER);
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[test]
fn flags_override_defaults() {
    let config = Config::load_from_iter([
        "chain-demo",
        "--output-path",
        "/tmp/sevroute/out.txt",
        "--log-filter",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("load configuration");

    assert_eq!(config.output_path, Utf8PathBuf::from("/tmp/sevroute/out.txt"));
    assert_eq!(config.log_filter, "debug");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[rstest]
#[case::lower("compact", LogFormat::Compact)]
#[case::upper("JSON", LogFormat::Json)]
fn log_format_parses_case_insensitively(#[case] input: &str, #[case] expected: LogFormat) {
    let config = Config::load_from_iter(["observer-demo", "--log-format", input])
        .expect("load configuration");
    assert_eq!(config.log_format(), expected);
}

#[test]
fn partial_flags_keep_remaining_defaults() {
    let config = Config::load_from_iter(["command-demo", "--log-filter", "trace"])
        .expect("load configuration");
    assert_eq!(config.log_filter(), "trace");
    assert_eq!(config.output_path().as_str(), defaults::DEFAULT_OUTPUT_PATH);
}
