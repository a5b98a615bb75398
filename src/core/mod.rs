//! Core functionality for source tree access and analysis

pub mod source_tree;
pub mod walker;

pub use source_tree::{DirEntryInfo, MemorySourceTree, OsSourceTree, SourceTree};
pub use walker::Walker;
