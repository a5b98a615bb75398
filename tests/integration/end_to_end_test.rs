//! End-to-end tests: command line in, rendered graph out

use super::support::{create_shop_module, write_file};
use clap::Parser;
use pkggraph::cli::{Args, Command};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Run pkggraph with an explicit (empty unless given) config file so that
/// no config from the machine running the tests leaks in
fn run(root: &Path, config: &str, extra: &[&str]) -> (i32, std::path::PathBuf) {
    let config_path = root.join("test-config.toml");
    fs::write(&config_path, config).unwrap();
    let output = root.join("out.txt");

    let mut argv: Vec<OsString> = vec![
        "pkggraph".into(),
        "--root".into(),
        root.as_os_str().to_owned(),
        "--config".into(),
        config_path.into_os_string(),
        "--output-file".into(),
        output.clone().into_os_string(),
    ];
    argv.extend(extra.iter().map(OsString::from));

    let code = Command::from_args(Args::parse_from(argv)).run();
    (code, output)
}

#[test]
fn test_dot_output_end_to_end() {
    let dir = create_shop_module();
    let (code, output) = run(dir.path(), "", &["--entry", "cmd/server"]);
    assert_eq!(code, 0);

    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "digraph G {\n\
         cmd_server -> internal_api\n\
         cmd_server -> pkg_log\n\
         internal_api -> internal_store\n\
         internal_api -> pkg_log\n\
         internal_store -> pkg_db_util\n\
         internal_store -> pkg_log\n\
         }\n"
    );
}

#[test]
fn test_spec_style_example() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_file(
        root,
        "cmd/main.go",
        "package main\n\nimport (\n\t\"modname/pkg/util\"\n\t\"modname/pkg/config\"\n)\n",
    );
    write_file(root, "pkg/config/config.go", "package config\n\nimport \"modname/pkg/util\"\n");
    write_file(root, "pkg/util/util.go", "package util\n");

    let (code, output) = run(root, "", &["-e", "cmd", "-m", "modname"]);
    assert_eq!(code, 0);
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "digraph G {\ncmd -> pkg_config\ncmd -> pkg_util\npkg_config -> pkg_util\n}\n"
    );
}

#[test]
fn test_settings_from_config_file() {
    let dir = create_shop_module();
    let config = r#"
        entry = "internal/store"
        output_format = "json"
    "#;
    let (code, output) = run(dir.path(), config, &[]);
    assert_eq!(code, 0);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(json["module"], "example.com/shop");
    assert_eq!(json["entry"], "internal/store");
    assert_eq!(json["edges"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["directories"],
        serde_json::json!(["internal/store", "pkg/db-util", "pkg/log"])
    );
}

#[test]
fn test_command_line_overrides_config_file() {
    let dir = create_shop_module();
    let config = "entry = \"internal/store\"\noutput_format = \"json\"\n";
    let (code, output) = run(
        dir.path(),
        config,
        &["--entry", "pkg/log", "--output", "text", "--quiet"],
    );
    assert_eq!(code, 0);
    // pkg/log has no in-module imports
    assert_eq!(fs::read_to_string(output).unwrap(), "");
}

#[test]
fn test_lex_error_exit_code_and_no_output() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/bad\n");
    write_file(dir.path(), "cmd/main.go", "package main\n\nimport ~\"fmt\"\n");

    let (code, output) = run(dir.path(), "", &["--entry", "cmd"]);
    assert_eq!(code, 1);
    assert!(!output.exists());
}

#[test]
fn test_missing_entry_is_usage_error() {
    let dir = create_shop_module();
    let (code, output) = run(dir.path(), "", &[]);
    assert_eq!(code, 2);
    assert!(!output.exists());
}
