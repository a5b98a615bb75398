//! Error context utilities for pkggraph
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use crate::error::{GraphError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Attribute a failed directory listing to `path`
    fn with_dir_context<P: AsRef<Path>>(self, path: P) -> Result<T>;

    /// Attribute a failed file open to `path`
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ResultExt<T, std::io::Error> for std::result::Result<T, std::io::Error> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| GraphError::Config {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_dir_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|source| GraphError::ReadDir {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|source| GraphError::FileOpen {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error message
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GraphError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GraphError,
    {
        self.ok_or_else(err_fn)
    }
}
