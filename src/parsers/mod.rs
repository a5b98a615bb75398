//! Parsing of Go sources and the graph built from them
//!
//! [`scanner`] turns source text into tokens, [`imports`] reads the import
//! declarations from those tokens and [`dependency_graph_builder`] follows
//! them through the module. [`go_mod`] reads the module name.

pub mod dependency_graph_builder;
pub mod go_mod;
pub mod imports;
pub mod scanner;
pub mod token;

pub use dependency_graph_builder::{DependencyGraphBuilder, GraphBuilderConfig};
pub use go_mod::read_module_name;
pub use imports::{extract_imports, extract_imports_from_str, ImportExtractor};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
