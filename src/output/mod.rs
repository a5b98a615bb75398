//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::formatters::sanitize_node;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::analysis::AnalysisResults;
use crate::models::config::OutputFormat;

/// Trait for different output formatters
pub trait Formatter {
    /// Format analysis results into a string
    fn format(&self, results: &AnalysisResults) -> Result<String>;
}

/// GraphViz formatter, one `src -> dst` line per edge
pub struct DotFormatter;

impl Formatter for DotFormatter {
    fn format(&self, results: &AnalysisResults) -> Result<String> {
        Ok(formatters::format_results_dot(results))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, results: &AnalysisResults) -> Result<String> {
        formatters::format_results_json(results)
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, quiet: bool) -> Self {
        Self { use_colors, quiet }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, results: &AnalysisResults) -> Result<String> {
        // Quiet output is the bare edge list
        Ok(formatters::format_results_text(
            results,
            self.use_colors,
            !self.quiet,
        ))
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, quiet: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Dot => Box::new(DotFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, quiet)),
    }
}
