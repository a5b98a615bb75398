//! Error handling for pkggraph
//!
//! This module provides the error type, the result alias, and helpers for
//! attaching context to errors.

pub mod context;
pub mod types;

pub use context::{OptionExt, ResultExt};
pub use types::{ErrorSeverity, GraphError, Result};
