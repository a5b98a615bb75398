//! Command-line parsing and exit code tests

use super::support::create_shop_module;
use clap::Parser;
use pkggraph::cli::{Args, Command};
use pkggraph::config::{load_config_with_env, CliArgs, EnvConfig};
use pkggraph::models::config::OutputFormat;
use std::ffi::OsString;
use std::path::PathBuf;

#[test]
fn test_help_mentions_entry_and_module() {
    let err = Args::try_parse_from(["pkggraph", "--help"]).unwrap_err();
    let help = err.to_string();
    assert!(help.contains("--entry"));
    assert!(help.contains("--module"));
    assert!(help.contains("gomod"));
}

#[test]
fn test_short_flags() {
    let args = Args::parse_from(["pkggraph", "-e", "cmd", "-m", "m", "-r", "/r", "-o", "text", "-q"]);
    assert_eq!(args.entry.as_deref(), Some("cmd"));
    assert_eq!(args.module.as_deref(), Some("m"));
    assert_eq!(args.root, Some(PathBuf::from("/r")));
    assert!(args.quiet);
}

#[test]
fn test_args_flow_into_settings() {
    let dir = create_shop_module();
    let config_path = dir.path().join("empty.toml");
    std::fs::write(&config_path, "").unwrap();

    let argv: Vec<OsString> = vec![
        "pkggraph".into(),
        "--root".into(),
        dir.path().as_os_str().to_owned(),
        "--config".into(),
        config_path.into_os_string(),
        "--entry".into(),
        "cmd/server".into(),
        "--exclude".into(),
        "tools/*".into(),
        "--output".into(),
        "json".into(),
        "--include-tests".into(),
        "--no-colors".into(),
    ];
    let args = Args::parse_from(argv);

    let settings = load_config_with_env(
        CliArgs::from(&args),
        &EnvConfig::new("PKGGRAPH_CLI_TEST_UNSET"),
    )
    .unwrap();

    assert_eq!(settings.root.as_path(), dir.path());
    assert_eq!(settings.entry.as_deref(), Some("cmd/server"));
    assert_eq!(settings.exclude_patterns, vec!["tools/*".to_string()]);
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert!(settings.include_tests);
    assert!(!settings.use_colors);
    assert!(settings.module.is_none());
}

#[test]
fn test_missing_config_file_exit_code() {
    let command = Command::from_args(Args::parse_from([
        "pkggraph",
        "--entry",
        "cmd",
        "--config",
        "/definitely/not/here.toml",
    ]));
    assert_eq!(command.run(), 2);
}

#[test]
fn test_invalid_config_file_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("bad.toml");
    std::fs::write(&config_path, "exclude_patterns = \"not a list\"\n").unwrap();

    let argv: Vec<OsString> = vec!["pkggraph".into(), "--config".into(), config_path.into_os_string()];
    let command = Command::from_args(Args::parse_from(argv));
    assert_eq!(command.run(), 2);
}
