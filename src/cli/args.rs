//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// pkggraph - directory dependency graphs for Go modules
#[derive(Parser, Debug, Clone)]
#[command(name = "pkggraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Draw the directory dependency graph of a Go module")]
#[command(long_about = "pkggraph starts from one directory of a Go module, reads the import declarations \
of its source files and follows every import that points back into the same module. \
The directories it reaches and the imports between them are written as a GraphViz digraph.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Graph everything reachable from ./cmd/server, module name from go.mod
    pkggraph --entry cmd/server

    # Name the module explicitly
    pkggraph --entry cmd/server --module example.com/project

    # Analyze a module that lives somewhere else
    pkggraph --root ../project --entry cmd/server

Output Options:
    # Render with GraphViz
    pkggraph --entry cmd/server | dot -Tsvg > deps.svg

    # JSON for scripts, including detected import cycles
    pkggraph --entry cmd/server --output json

    # Save results to a file
    pkggraph --entry cmd/server --output-file deps.dot

Filtering:
    # Leave generated code out of the graph
    pkggraph --entry cmd/server --exclude 'internal/gen/*'

    # Follow imports of _test.go files as well
    pkggraph --entry cmd/server --include-tests

Configuration:
    # Use a specific configuration file
    pkggraph --config ./pkggraph.toml

    # Create a default configuration file
    pkggraph --init

DOT Node Names:
    Directories are written as node ids with '/', '\\' and '-' mapped to '_'
    (internal/my-lib -> internal_my_lib). Ids that are not plain identifiers
    are quoted: the module root prints as \".\" and pkg/v1.2 as \"pkg_v1.2\".
")]
pub struct Args {
    /// Module-relative directory to start from
    #[arg(short, long, value_name = "DIR", help = "Module-relative directory the traversal starts from (e.g., cmd/server)")]
    pub entry: Option<String>,

    /// Go module name
    #[arg(short, long, visible_alias = "gomod", value_name = "NAME", help = "Go module name (read from go.mod under --root if not specified)")]
    pub module: Option<String>,

    /// Module root directory
    #[arg(short, long, value_name = "DIR", help = "Module root directory that module-relative paths are resolved against (defaults to current directory)")]
    pub root: Option<PathBuf>,

    /// Leave directories matching these glob patterns out of the graph
    #[arg(long, value_name = "PATTERN", help = "Glob patterns for module-relative directories to exclude (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Output format (dot, json, text)
    #[arg(short, long, value_enum, help = "Output format: 'dot' for GraphViz (default), 'json' for machine processing, 'text' for a readable edge list")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Scan test files too
    #[arg(long, help = "Also follow imports of test files (_test.go)")]
    pub include_tests: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .pkggraph.toml in current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Only report errors
    #[arg(short, long, help = "Only log errors")]
    pub quiet: bool,

    /// Log every directory and file as it is scanned
    #[arg(short, long, conflicts_with = "quiet", help = "Log every directory and file as it is scanned")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored text output")]
    pub no_colors: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.pkggraph.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GraphViz digraph
    Dot,
    /// JSON output for programmatic consumption
    Json,
    /// Human-readable edge list
    Text,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
