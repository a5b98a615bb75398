//! Walker tests over real directory trees

use super::support::{create_shop_module, write_file, MODULE};
use pkggraph::{core::Walker, error::GraphError, models::config::Settings};
use std::path::Path;

fn settings(root: &Path, entry: &str) -> Settings {
    Settings {
        root: root.to_path_buf(),
        entry: Some(entry.to_string()),
        ..Settings::default()
    }
}

fn edge_list(results: &pkggraph::AnalysisResults) -> Vec<String> {
    results.graph.edges.iter().map(|e| e.to_string()).collect()
}

#[test]
fn test_shop_module_graph() {
    let dir = create_shop_module();
    let results = Walker::new(settings(dir.path(), "cmd/server")).analyze().unwrap();

    assert_eq!(results.graph.module, MODULE);
    assert_eq!(
        edge_list(&results),
        vec![
            "cmd/server -> internal/api",
            "cmd/server -> pkg/log",
            "internal/api -> internal/store",
            "internal/api -> pkg/log",
            "internal/store -> pkg/db-util",
            "internal/store -> pkg/log",
        ]
    );
    assert!(!results.graph.is_visited("tools/gen"));
    assert!(results.cycles.is_empty());
}

#[test]
fn test_shop_module_statistics() {
    let dir = create_shop_module();
    let results = Walker::new(settings(dir.path(), "cmd/server")).analyze().unwrap();
    let stats = &results.graph.statistics;

    assert_eq!(stats.directories_scanned, 5);
    assert_eq!(stats.files_scanned, 6);
    assert_eq!(stats.files_skipped, 2);
    assert_eq!(stats.imports_seen, 15);
    assert_eq!(stats.external_imports, 8);
    assert_eq!(stats.self_imports, 1);
    assert_eq!(stats.edges, 6);
}

#[test]
fn test_include_tests_follows_test_imports() {
    let dir = create_shop_module();
    let mut settings = settings(dir.path(), "cmd/server");
    settings.include_tests = true;

    let results = Walker::new(settings).analyze().unwrap();
    assert!(results.graph.contains_edge("cmd/server", "tools/gen"));
    assert!(results.graph.is_visited("tools/gen"));
}

#[test]
fn test_exclude_pattern_prunes_subgraph() {
    let dir = create_shop_module();
    let mut settings = settings(dir.path(), "cmd/server");
    settings.exclude_patterns = vec!["internal/store".to_string()];

    let results = Walker::new(settings).analyze().unwrap();
    assert!(!results.graph.is_visited("internal/store"));
    assert!(!results.graph.is_visited("pkg/db-util"));
    assert_eq!(results.graph.statistics.excluded_imports, 1);
}

#[test]
fn test_entry_starting_elsewhere() {
    let dir = create_shop_module();
    let results = Walker::new(settings(dir.path(), "./internal/store/")).analyze().unwrap();

    assert_eq!(results.graph.entry, "internal/store");
    assert_eq!(
        edge_list(&results),
        vec!["internal/store -> pkg/db-util", "internal/store -> pkg/log"]
    );
}

#[test]
fn test_missing_import_target_is_read_dir_error() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/broken\n");
    write_file(
        dir.path(),
        "cmd/main.go",
        "package main\n\nimport \"example.com/broken/gone\"\n",
    );

    let err = Walker::new(settings(dir.path(), "cmd")).analyze().unwrap_err();
    match &err {
        GraphError::ReadDir { path, .. } => assert!(path.ends_with("gone")),
        other => panic!("Expected ReadDir error, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().starts_with("failed to read dir "));
}

#[test]
fn test_malformed_source_aborts_analysis() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/broken\n");
    write_file(
        dir.path(),
        "cmd/main.go",
        "package main\n\nimport \"example.com/broken/lib\"\n",
    );
    write_file(dir.path(), "lib/lib.go", "package lib\n\nimport \"fmt\n");

    let err = Walker::new(settings(dir.path(), "cmd")).analyze().unwrap_err();
    match &err {
        GraphError::Lex { file, line, message } => {
            assert!(file.ends_with("lib/lib.go"));
            assert_eq!(*line, 3);
            assert!(message.contains("unterminated"));
        }
        other => panic!("Expected Lex error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_reports_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/broken\n");
    write_file(dir.path(), "cmd/main.go", "package main\n\nimport (\n\t\"fmt\"\n");

    let err = Walker::new(settings(dir.path(), "cmd")).analyze().unwrap_err();
    assert!(matches!(err, GraphError::Parse { .. }));
    assert!(err.user_message().contains("main.go"));
}

#[test]
fn test_mutual_imports_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "go.mod", "module example.com/loop\n");
    write_file(dir.path(), "a/a.go", "package a\nimport \"example.com/loop/b\"\n");
    write_file(dir.path(), "b/b.go", "package b\nimport \"example.com/loop/a\"\n");

    let results = Walker::new(settings(dir.path(), "a")).analyze().unwrap();
    assert_eq!(edge_list(&results), vec!["a -> b", "b -> a"]);
    assert_eq!(results.cycles, vec![vec!["a".to_string(), "b".to_string()]]);
}
