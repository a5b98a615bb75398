//! Shared helpers

pub mod module_path;

pub use module_path::{normalize_dir, ModulePathResolver};
