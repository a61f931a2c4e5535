use std::time::Duration;

use assert_matches::assert_matches;
use clap::Parser;

use cloud_invoker::cli::{CliArgs, Command, TemplateFormat};
use cloud_invoker::error::ConfigError;

fn simulate(args: &[&str]) -> Result<cloud_invoker::cli::SimulateConfig, ConfigError> {
    let argv = ["cloud-invoker", "simulate"].into_iter().chain(args.iter().copied());
    let parsed = CliArgs::try_parse_from(argv).expect("cli parse should succeed");

    match parsed.command {
        Command::Simulate(args) => args.into_config(),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn simulate_defaults() {
    let config = simulate(&[]).expect("config should validate");

    assert_eq!(config.code, "Throttling");
    assert_eq!(config.failures, 3);
    assert_eq!(config.catcher.reason, "Throttling");
    assert_eq!(config.catcher.retry_count, 10);
    assert_eq!(config.catcher.retry_wait, Duration::from_millis(100));
    assert!(config.deadline.is_none());
}

#[test]
fn simulate_builds_a_single_catcher_invoker() {
    let config = simulate(&[
        "--reason",
        "ServiceUnavailable",
        "--code",
        "ServiceUnavailable.Temp",
        "--retries",
        "2",
        "--deadline-ms",
        "1500",
    ])
    .expect("config should validate");

    let invoker = config.invoker();
    assert_eq!(invoker.catchers().len(), 1);
    assert_eq!(invoker.catchers()[0].retry_count, 2);
    assert_eq!(invoker.deadline(), Some(Duration::from_millis(1500)));
    assert_eq!(config.code, "ServiceUnavailable.Temp");
}

#[test]
fn rejects_blank_reason() {
    let err = simulate(&["--reason", "  "]).expect_err("validation should fail");
    assert_matches!(err, ConfigError::Empty { field: "reason" });
}

#[test]
fn rejects_out_of_range_wait() {
    let err = simulate(&["--wait-ms", "60001"]).expect_err("validation should fail");
    assert_matches!(
        err,
        ConfigError::OutOfRange { field, min: 0, max: 60_000, actual: 60_001 } if field == "wait-ms"
    );
}

#[test]
fn rejects_zero_deadline() {
    let err = simulate(&["--deadline-ms", "0"]).expect_err("validation should fail");
    assert_matches!(err, ConfigError::OutOfRange { field: "deadline-ms", .. });
}

#[test]
fn parses_compare_subcommand() {
    let args = CliArgs::try_parse_from([
        "cloud-invoker",
        "--verbose",
        "compare",
        "--format",
        "yaml",
        "a.yaml",
        "b.yaml",
    ])
    .expect("cli parse should succeed");

    assert!(args.verbose);
    assert_matches!(
        args.command,
        Command::Compare { format: TemplateFormat::Yaml, first, .. } if first.ends_with("a.yaml")
    );
}

#[test]
fn parse_id_defaults_to_two_parts() {
    let args = CliArgs::try_parse_from(["cloud-invoker", "parse-id", "--id", "a:b"])
        .expect("cli parse should succeed");

    assert_matches!(args.command, Command::ParseId { parts: 2, .. });
}
