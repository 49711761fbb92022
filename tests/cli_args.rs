use clap::Parser;
use collectf::cli::Args;
use collectf::config::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn parses_destination_and_flags() {
    let args = Args::parse_from(["collectf", "out", "--simulate", "--move"]);
    assert_eq!(args.dest, PathBuf::from("out"));
    assert!(args.simulate);
    assert!(args.move_files);
}

#[test]
fn short_flags_match_long_flags() {
    let args = Args::parse_from(["collectf", "out", "-n", "-m"]);
    assert!(args.simulate);
    assert!(args.move_files);
}

#[test]
fn destination_is_required() {
    assert!(Args::try_parse_from(["collectf"]).is_err());
    assert!(Args::try_parse_from(["collectf", "--simulate"]).is_err());
}

#[test]
fn defaults_are_copy_without_simulate() {
    let args = Args::parse_from(["collectf", "out"]);
    assert!(!args.simulate);
    assert!(!args.move_files);
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["collectf", "out", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level().unwrap(), LogLevel::Debug); // --debug wins

    let args = Args::parse_from(["collectf", "out", "--log-level", "info"]);
    assert_eq!(args.effective_log_level().unwrap(), LogLevel::Info);

    let args = Args::parse_from(["collectf", "out"]);
    assert!(args.effective_log_level().is_none());
}

#[test]
fn config_from_args_maps_fields() {
    let args = Args::parse_from(["collectf", "/dest/dir", "--move", "--json", "--debug"]);
    let cfg = Config::from_args(&args);
    assert_eq!(cfg.dest, PathBuf::from("/dest/dir"));
    assert!(cfg.move_files);
    assert!(!cfg.simulate);
    assert!(cfg.json_logs);
    assert_eq!(cfg.log_level, LogLevel::Debug);
}
