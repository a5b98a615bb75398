//! Directory dependency graph construction
//!
//! Starting from an entry directory, every source file is scanned for
//! imports. Imports inside the module become edges between directories and
//! the imported directories are scanned in turn, depth first. A directory is
//! only ever scanned once, which is what makes import cycles and diamonds
//! terminate.

use crate::core::source_tree::{join_rel, SourceTree};
use crate::error::{Result, ResultExt};
use crate::models::dependency_graph::DependencyGraph;
use crate::parsers::imports::extract_imports;
use crate::utils::module_path::{normalize_dir, ModulePathResolver};
use glob::Pattern;
use tracing::{debug, trace};

/// Configuration for dependency graph building
#[derive(Debug, Clone)]
pub struct GraphBuilderConfig {
    pub source_suffix: String,
    pub test_suffix: String,
    pub include_tests: bool,
    /// Glob patterns over module-relative directories
    pub exclude_patterns: Vec<String>,
}

impl Default for GraphBuilderConfig {
    fn default() -> Self {
        Self {
            source_suffix: ".go".to_string(),
            test_suffix: "_test.go".to_string(),
            include_tests: false,
            exclude_patterns: Vec::new(),
        }
    }
}

/// Builds directory dependency graphs over a [`SourceTree`]
pub struct DependencyGraphBuilder<'a, T: SourceTree + ?Sized> {
    tree: &'a T,
    resolver: ModulePathResolver,
    config: GraphBuilderConfig,
    exclude: Vec<Pattern>,
}

impl<'a, T: SourceTree + ?Sized> DependencyGraphBuilder<'a, T> {
    /// Create a builder following imports of `module_name`
    pub fn new(tree: &'a T, module_name: impl Into<String>) -> Self {
        Self {
            tree,
            resolver: ModulePathResolver::new(module_name),
            config: GraphBuilderConfig::default(),
            exclude: Vec::new(),
        }
    }

    /// Replace the configuration; fails on an invalid exclude pattern
    pub fn with_config(mut self, config: GraphBuilderConfig) -> Result<Self> {
        self.exclude = config
            .exclude_patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        self.config = config;
        Ok(self)
    }

    /// Build the graph reachable from `entry`. Every call starts from an
    /// empty graph.
    pub fn build(&self, entry: &str) -> Result<DependencyGraph> {
        let entry = normalize_dir(entry);
        let mut graph = DependencyGraph::new(self.resolver.module_name(), entry.clone());
        self.parse_dir(&entry, &mut graph)?;
        Ok(graph)
    }

    fn parse_dir(&self, dir: &str, graph: &mut DependencyGraph) -> Result<()> {
        debug!(dir, "scanning directory");
        // Marked on entry, so an import cycle leading back here stops.
        graph.mark_visited(dir);

        let entries = self
            .tree
            .list_dir(dir)
            .with_dir_context(self.tree.display_path(dir))?;
        graph.statistics.directories_scanned += 1;

        for entry in entries {
            if !entry.is_file {
                continue;
            }
            if !self.is_source_file(&entry.name) {
                trace!(dir, file = %entry.name, "skipping file");
                graph.statistics.files_skipped += 1;
                continue;
            }

            let file = join_rel(dir, &entry.name);
            let imports = self.parse_file(&file)?;
            graph.statistics.files_scanned += 1;
            debug!(file = %file, imports = imports.len(), "scanned file");

            for import in imports {
                graph.statistics.imports_seen += 1;

                let Some(next_dir) = self.resolver.resolve(&import) else {
                    graph.statistics.external_imports += 1;
                    continue;
                };
                if next_dir == dir {
                    graph.statistics.self_imports += 1;
                    continue;
                }
                if self.is_excluded(&next_dir) {
                    debug!(dir = %next_dir, "excluded directory");
                    graph.statistics.excluded_imports += 1;
                    continue;
                }

                graph.add_edge(dir, next_dir.as_str());
                if !graph.is_visited(&next_dir) {
                    self.parse_dir(&next_dir, graph)?;
                }
            }
        }

        Ok(())
    }

    /// The reader is dropped before returning, on success and on error.
    fn parse_file(&self, file: &str) -> Result<Vec<String>> {
        let path = self.tree.display_path(file);
        let reader = self.tree.open(file).with_file_context(&path)?;
        extract_imports(&path, reader)
    }

    fn is_source_file(&self, name: &str) -> bool {
        name.ends_with(&self.config.source_suffix)
            && (self.config.include_tests || !name.ends_with(&self.config.test_suffix))
    }

    fn is_excluded(&self, dir: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(dir))
    }
}
