//! pkggraph - directory dependency graphs for Go modules
//!
//! Starting from one directory of a Go module, this library reads the import
//! declarations of every source file, follows the imports that stay inside
//! the module and records which directory depends on which. The result can
//! be rendered as a GraphViz digraph, JSON or plain text.
//!
//! ```no_run
//! use pkggraph::{core::OsSourceTree, parsers::DependencyGraphBuilder};
//!
//! let tree = OsSourceTree::new("/src/project");
//! let graph = DependencyGraphBuilder::new(&tree, "example.com/project").build("cmd/server")?;
//! for edge in &graph.edges {
//!     println!("{}", edge);
//! }
//! # Ok::<(), pkggraph::GraphError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use error::{ErrorSeverity, GraphError, OptionExt, Result, ResultExt};
pub use models::{
    analysis::AnalysisResults,
    config::{OutputFormat, Settings},
    dependency_graph::{DependencyEdge, DependencyGraph, GraphStatistics},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
