//! Output formatting functionality
//!
//! This module renders analysis results as GraphViz, JSON or plain text.

use crate::error::Result;
use crate::models::analysis::AnalysisResults;
use crate::models::dependency_graph::{DependencyEdge, GraphStatistics};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use serde::Serialize;
use std::collections::BTreeSet;

/// Turn a module-relative directory into a GraphViz node id.
///
/// Separators and hyphens become underscores. Anything that is still not a
/// plain identifier afterwards (the module root `.`, names with dots) is
/// quoted.
pub fn sanitize_node(dir: &str) -> String {
    let id: String = dir
        .chars()
        .map(|c| match c {
            '/' | '\\' | '-' => '_',
            c => c,
        })
        .collect();

    if is_plain_id(&id) {
        id
    } else {
        format!("\"{}\"", id.replace('"', "\\\""))
    }
}

fn is_plain_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

/// Format results as a GraphViz digraph
pub fn format_results_dot(results: &AnalysisResults) -> String {
    // Deduplicated after sanitizing: `a-b -> c` and `a/b -> c` are one line
    let lines: BTreeSet<String> = results
        .graph
        .edges
        .iter()
        .map(|edge| format!("{} -> {}", sanitize_node(&edge.from), sanitize_node(&edge.to)))
        .collect();

    let mut output = String::from("digraph G {\n");
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str("}\n");
    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    module: &'a str,
    entry: &'a str,
    edges: &'a BTreeSet<DependencyEdge>,
    directories: &'a BTreeSet<String>,
    cycles: &'a [Vec<String>],
    statistics: &'a GraphStatistics,
    scan_duration_ms: u64,
}

/// Format results as pretty-printed JSON
pub fn format_results_json(results: &AnalysisResults) -> Result<String> {
    let report = JsonReport {
        module: &results.graph.module,
        entry: &results.graph.entry,
        edges: &results.graph.edges,
        directories: &results.graph.visited,
        cycles: &results.cycles,
        statistics: &results.graph.statistics,
        scan_duration_ms: results.scan_duration.as_millis() as u64,
    };
    let mut json = serde_json::to_string_pretty(&report)?;
    json.push('\n');
    Ok(json)
}

/// Format results as a readable edge list, optionally followed by a summary
pub fn format_results_text(results: &AnalysisResults, use_colors: bool, summary: bool) -> String {
    let graph = &results.graph;
    let mut output = String::new();

    if summary {
        let heading = format!("Dependency graph of {} from {}", graph.module, graph.entry);
        if use_colors {
            output.push_str(&format!("{}\n\n", Style::new().bold().paint(heading)));
        } else {
            output.push_str(&format!("{}\n\n", heading));
        }
    }

    if graph.is_empty() && summary {
        output.push_str("No dependencies inside the module.\n");
    }

    for edge in &graph.edges {
        if use_colors {
            output.push_str(&format!(
                "{} {} {}\n",
                Cyan.paint(edge.from.as_str()),
                Style::new().dimmed().paint("->"),
                Green.paint(edge.to.as_str())
            ));
        } else {
            output.push_str(&format!("{}\n", edge));
        }
    }

    if summary {
        output.push_str(&format_summary_text(results, use_colors));
    }

    output
}

fn format_summary_text(results: &AnalysisResults, use_colors: bool) -> String {
    let stats = &results.graph.statistics;
    let mut output = String::new();

    output.push_str("\nSummary:\n");
    output.push_str("--------\n");
    output.push_str(&format!("Directories scanned: {}\n", stats.directories_scanned));
    output.push_str(&format!(
        "Files scanned: {} ({} skipped)\n",
        stats.files_scanned, stats.files_skipped
    ));
    output.push_str(&format!(
        "Imports: {} ({} external, {} excluded, {} self)\n",
        stats.imports_seen, stats.external_imports, stats.excluded_imports, stats.self_imports
    ));
    output.push_str(&format!("Edges: {}\n", stats.edges));
    output.push_str(&format!("Scan duration: {}\n", results.format_duration()));

    if results.cycles.is_empty() {
        return output;
    }

    let title = format!("Import cycles: {}", results.cycles.len());
    if use_colors {
        output.push_str(&format!("\n{}\n", Red.bold().paint(title)));
    } else {
        output.push_str(&format!("\n{}\n", title));
    }
    for cycle in &results.cycles {
        let members = cycle.join(", ");
        if use_colors {
            output.push_str(&format!("  {}\n", Yellow.paint(members)));
        } else {
            output.push_str(&format!("  {}\n", members));
        }
    }

    output
}
