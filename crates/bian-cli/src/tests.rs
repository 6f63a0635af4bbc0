use crate::cli::Cli;
use bian_render::{OutputFormat, OutputMode};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["bian2context"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_defaults() {
    let cli = parse(&["./yamls"]);
    let opts = cli.render_options();
    assert_eq!(cli.directory, PathBuf::from("./yamls"));
    assert_eq!(opts.mode, OutputMode::Full);
    assert_eq!(opts.format, OutputFormat::Text);
    assert!(!opts.compress);
    assert_eq!(opts.output_path(), PathBuf::from("summary_compact.txt"));
}

#[test]
fn test_json_alias() {
    let cli = parse(&["./yamls", "--json"]);
    assert_eq!(cli.output_format(), OutputFormat::Json);
}

#[test]
fn test_explicit_format_wins_over_json_flag() {
    let cli = parse(&["./yamls", "--json", "--format=txt"]);
    assert_eq!(cli.output_format(), OutputFormat::Text);
}

#[test]
fn test_invalid_format_rejected() {
    assert!(Cli::try_parse_from(["bian2context", "./yamls", "--format=xml"]).is_err());
}

#[test]
fn test_only_flags_and_output() {
    let cli = parse(&["./yamls", "--only-events", "--only-entities", "--output=my.txt", "--compress"]);
    let opts = cli.render_options();
    assert_eq!(opts.mode, OutputMode::Entities);
    assert!(opts.compress);
    assert!(cli.summarizer_config().compress);
    assert_eq!(opts.output_path(), PathBuf::from("my.txt"));
}

#[test]
fn test_filter_passed_through() {
    let cli = parse(&["./yamls", "--filter=Card"]);
    assert_eq!(cli.render_options().filter.as_deref(), Some("Card"));
}

#[test]
fn test_missing_directory_argument() {
    assert!(Cli::try_parse_from(["bian2context"]).is_err());
}
