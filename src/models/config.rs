//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for pkggraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Module root; module-relative directories are resolved against it
    pub root: PathBuf,

    /// Module-relative directory the traversal starts from
    pub entry: Option<String>,

    /// Module name; read from go.mod under `root` when unset
    pub module: Option<String>,

    /// Glob patterns for module-relative directories to leave out of the graph
    pub exclude_patterns: Vec<String>,

    /// Suffix of files that are scanned for imports
    pub source_suffix: String,

    /// Suffix of test files, skipped unless `include_tests` is set
    pub test_suffix: String,

    /// Whether test files contribute imports
    pub include_tests: bool,

    /// Output format (dot, json, text)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to log each directory and file as it is scanned
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            entry: None,
            module: None,
            exclude_patterns: Vec::new(),
            source_suffix: ".go".to_string(),
            test_suffix: "_test.go".to_string(),
            include_tests: false,
            output_format: OutputFormat::Dot,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

impl Settings {
    /// Default log filter; `verbose` wins when both flags are set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// GraphViz digraph
    Dot,
    /// JSON output for programmatic consumption
    Json,
    /// Human-readable edge list
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(OutputFormat::Dot),
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Dot => write!(f, "dot"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub root: Option<PathBuf>,
    pub entry: Option<String>,
    pub module: Option<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub source_suffix: Option<String>,
    pub test_suffix: Option<String>,
    pub include_tests: Option<bool>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.root.is_some() {
            self.root = other.root;
        }
        if other.entry.is_some() {
            self.entry = other.entry;
        }
        if other.module.is_some() {
            self.module = other.module;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.source_suffix.is_some() {
            self.source_suffix = other.source_suffix;
        }
        if other.test_suffix.is_some() {
            self.test_suffix = other.test_suffix;
        }
        if other.include_tests.is_some() {
            self.include_tests = other.include_tests;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(root) = &self.root {
            settings.root = root.clone();
        }
        if let Some(entry) = &self.entry {
            settings.entry = Some(entry.clone());
        }
        if let Some(module) = &self.module {
            settings.module = Some(module.clone());
        }
        if let Some(exclude_patterns) = &self.exclude_patterns {
            settings.exclude_patterns = exclude_patterns.clone();
        }
        if let Some(source_suffix) = &self.source_suffix {
            settings.source_suffix = source_suffix.clone();
        }
        if let Some(test_suffix) = &self.test_suffix {
            settings.test_suffix = test_suffix.clone();
        }
        if let Some(include_tests) = self.include_tests {
            settings.include_tests = include_tests;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
