//! Directory dependency graph data structures

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// "Directory `from` contains a file importing directory `to`"
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
}

impl DependencyEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Counters collected while the graph is built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub directories_scanned: usize,
    pub files_scanned: usize,
    /// Directory entries that were not source files, or were test files
    pub files_skipped: usize,
    pub imports_seen: usize,
    pub external_imports: usize,
    pub excluded_imports: usize,
    pub self_imports: usize,
    pub edges: usize,
}

/// Package dependency graph of one module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Module name imports were matched against
    pub module: String,

    /// Directory the traversal started from
    pub entry: String,

    /// Unique dependency edges
    pub edges: BTreeSet<DependencyEdge>,

    /// Directories whose files were scanned
    pub visited: BTreeSet<String>,

    pub statistics: GraphStatistics,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new(module: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            entry: entry.into(),
            ..Default::default()
        }
    }

    /// Add an edge; returns false when it was already present
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> bool {
        let inserted = self.edges.insert(DependencyEdge::new(from, to));
        self.statistics.edges = self.edges.len();
        inserted
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges.contains(&DependencyEdge::new(from, to))
    }

    pub fn mark_visited(&mut self, dir: impl Into<String>) {
        self.visited.insert(dir.into());
    }

    pub fn is_visited(&self, dir: &str) -> bool {
        self.visited.contains(dir)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Directories `dir` imports, in sorted order
    pub fn dependencies_of(&self, dir: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|edge| edge.from == dir)
            .map(|edge| edge.to.as_str())
            .collect()
    }

    /// Directories importing `dir`, in sorted order
    pub fn dependents_of(&self, dir: &str) -> Vec<&str> {
        // Edges order by `from` first
        self.edges
            .iter()
            .filter(|edge| edge.to == dir)
            .map(|edge| edge.from.as_str())
            .collect()
    }

    /// Every directory mentioned by an edge
    pub fn directories(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
            .collect()
    }

    /// Groups of directories that import each other, directly or through
    /// other directories. Each group is sorted; groups are ordered by their
    /// first directory.
    pub fn find_cycles(&self) -> Vec<Vec<String>> {
        let mut graph: DiGraph<&str, ()> = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for dir in self.directories() {
            indices.insert(dir, graph.add_node(dir));
        }
        for edge in &self.edges {
            graph.add_edge(indices[edge.from.as_str()], indices[edge.to.as_str()], ());
        }

        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| component.len() > 1)
            .map(|component| {
                let mut dirs: Vec<String> =
                    component.into_iter().map(|idx| graph[idx].to_string()).collect();
                dirs.sort();
                dirs
            })
            .collect();
        cycles.sort();
        cycles
    }
}
