//! Analysis entry point
//!
//! Resolves what the graph builder needs from [`Settings`] (module name,
//! entry directory, file filters), runs it over the module root and wraps
//! the graph in [`AnalysisResults`].

use crate::core::source_tree::OsSourceTree;
use crate::error::{GraphError, OptionExt, Result};
use crate::models::{analysis::AnalysisResults, config::Settings};
use crate::parsers::dependency_graph_builder::{DependencyGraphBuilder, GraphBuilderConfig};
use crate::parsers::go_mod::read_module_name;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main walker for dependency graph analysis
pub struct Walker {
    settings: Settings,
}

impl Walker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Build the dependency graph of the configured entry directory
    pub fn analyze(&self) -> Result<AnalysisResults> {
        let start_time = Instant::now();

        if !self.settings.root.is_dir() {
            return Err(GraphError::InvalidPath {
                path: self.settings.root.clone(),
            });
        }

        let entry = self.entry()?;
        let module = self.module_name()?;
        debug!(module = %module, entry = %entry, root = %self.settings.root.display(), "starting analysis");

        let tree = OsSourceTree::new(&self.settings.root);
        let builder = DependencyGraphBuilder::new(&tree, module).with_config(self.builder_config())?;
        let graph = builder.build(entry)?;

        let mut results = AnalysisResults::new(graph);
        results.set_scan_duration(start_time.elapsed());

        let stats = &results.graph.statistics;
        info!(
            directories = stats.directories_scanned,
            files = stats.files_scanned,
            edges = stats.edges,
            duration = %results.format_duration(),
            "analysis complete"
        );
        for cycle in &results.cycles {
            warn!(directories = %cycle.join(", "), "import cycle");
        }

        Ok(results)
    }

    /// Entry directory, which has to be given somewhere
    fn entry(&self) -> Result<&str> {
        self.settings
            .entry
            .as_deref()
            .filter(|entry| !entry.trim().is_empty())
            .ok_or_error(|| GraphError::config_error("no entry directory given"))
    }

    fn module_name(&self) -> Result<String> {
        match &self.settings.module {
            Some(module) if !module.trim().is_empty() => Ok(module.trim().to_string()),
            _ => {
                let module = read_module_name(&self.settings.root)?;
                debug!(module = %module, "module name read from go.mod");
                Ok(module)
            }
        }
    }

    fn builder_config(&self) -> GraphBuilderConfig {
        GraphBuilderConfig {
            source_suffix: self.settings.source_suffix.clone(),
            test_suffix: self.settings.test_suffix.clone(),
            include_tests: self.settings.include_tests,
            exclude_patterns: self.settings.exclude_patterns.clone(),
        }
    }
}
