//! Formatter tests on graphs built from real trees

use super::support::{create_shop_module, write_file};
use pkggraph::core::Walker;
use pkggraph::models::config::{OutputFormat, Settings};
use pkggraph::output::{create_formatter, create_writer};
use std::fs;

fn analyze(root: &std::path::Path, entry: &str) -> pkggraph::AnalysisResults {
    Walker::new(Settings {
        root: root.to_path_buf(),
        entry: Some(entry.to_string()),
        ..Settings::default()
    })
    .analyze()
    .unwrap()
}

#[test]
fn test_dot_lines_have_exact_form() {
    let dir = create_shop_module();
    let results = analyze(dir.path(), "cmd/server");
    let dot = create_formatter(OutputFormat::Dot, false, false)
        .format(&results)
        .unwrap();

    let lines: Vec<&str> = dot.lines().collect();
    assert_eq!(lines.first(), Some(&"digraph G {"));
    assert_eq!(lines.last(), Some(&"}"));
    for line in &lines[1..lines.len() - 1] {
        let (src, dst) = line.split_once(" -> ").unwrap();
        assert!(!src.contains('/') && !src.contains('-'), "bad node {}", src);
        assert!(!dst.contains('/') && !dst.contains('-'), "bad node {}", dst);
    }
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_module_root_node_is_quoted() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/tool\n");
    write_file(dir.path(), "tool.go", "package tool\n");
    write_file(
        dir.path(),
        "cmd/tool/main.go",
        "package main\n\nimport \"example.com/tool\"\n",
    );

    let results = analyze(dir.path(), "cmd/tool");
    let dot = create_formatter(OutputFormat::Dot, false, false)
        .format(&results)
        .unwrap();
    assert_eq!(dot, "digraph G {\ncmd_tool -> \".\"\n}\n");
}

#[test]
fn test_json_cycles() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/loop\n");
    write_file(dir.path(), "cmd/main.go", "package main\nimport \"example.com/loop/a\"\n");
    write_file(dir.path(), "a/a.go", "package a\nimport \"example.com/loop/b\"\n");
    write_file(dir.path(), "b/b.go", "package b\nimport \"example.com/loop/c\"\n");
    write_file(dir.path(), "c/c.go", "package c\nimport \"example.com/loop/a\"\n");

    let results = analyze(dir.path(), "cmd");
    let json = create_formatter(OutputFormat::Json, false, false)
        .format(&results)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["cycles"], serde_json::json!([["a", "b", "c"]]));
    assert_eq!(value["statistics"]["directories_scanned"], 4);
    assert!(value["scan_duration_ms"].is_u64());
}

#[test]
fn test_text_written_to_file() {
    let dir = create_shop_module();
    let results = analyze(dir.path(), "internal/store");
    let text = create_formatter(OutputFormat::Text, false, false)
        .format(&results)
        .unwrap();

    let out = dir.path().join("deps.txt");
    create_writer(Some(&out)).write(&text).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Dependency graph of example.com/shop from internal/store"));
    assert!(written.contains("internal/store -> pkg/db-util\n"));
    assert!(written.contains("Files scanned: 3 (1 skipped)"));
}
