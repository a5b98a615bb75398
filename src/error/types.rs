//! Error types and definitions for pkggraph
//!
//! Every error here is fatal for the run that produced it: the traversal
//! stops at the first failure and no partial graph is rendered.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels, used to pick the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Analysis failed (unreadable tree, malformed source)
    Error,
    /// Configuration or usage is wrong; nothing was analyzed
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for pkggraph operations
#[derive(Debug, Error)]
pub enum GraphError {
    /// Standard IO errors without a more specific location
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// A directory could not be listed
    #[error("failed to read dir {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be opened
    #[error("failed to open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file failed mid-read
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scanner rejected the source text
    #[error("scan file {file} error at line {line}: {message}")]
    Lex {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Unexpected token in the package/import grammar
    #[error("failed to parse file {file} at line {line}: {message}")]
    Parse {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// No module name was configured and none could be read from go.mod
    #[error("Module name not set and no module directive found in {path}")]
    ModuleNotFound { path: PathBuf },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl GraphError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GraphError::Config { .. }
            | GraphError::ConfigNotFound { .. }
            | GraphError::ConfigRead { .. }
            | GraphError::ConfigParse { .. }
            | GraphError::InvalidPath { .. }
            | GraphError::GlobPattern { .. }
            | GraphError::ModuleNotFound { .. } => ErrorSeverity::Critical,
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a configuration-level error
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Error => 1,
            ErrorSeverity::Critical => 2,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            GraphError::ReadDir { path, source } => {
                format!("Cannot list directory '{}': {}.", path.display(), source)
            }
            GraphError::FileOpen { path, source } => {
                format!("Cannot open source file '{}': {}.", path.display(), source)
            }
            GraphError::Lex { file, line, message } => {
                format!("{}:{}: {}", file.display(), line, message)
            }
            GraphError::Parse { file, line, message } => {
                format!("{}:{}: {}", file.display(), line, message)
            }
            GraphError::ModuleNotFound { path } => {
                format!(
                    "No module name given and '{}' has no module directive.",
                    path.display()
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// A hint for the most common mistakes, if there is one
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            GraphError::ReadDir { .. } => Some(
                "Import paths are resolved against --root; check that it points at the module root",
            ),
            GraphError::ModuleNotFound { .. } => {
                Some("Pass the module name with --module or point --root at the directory holding go.mod")
            }
            GraphError::ConfigNotFound { .. } => {
                Some("Create one with `pkggraph --init` or drop the --config flag")
            }
            GraphError::InvalidPath { .. } => {
                Some("Check that the path exists and is accessible")
            }
            _ => None,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        GraphError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        GraphError::Config {
            message: message.into(),
        }
    }

    /// Create a lexical error for a file
    pub fn lex_error(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        GraphError::Lex {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a parse error for a file
    pub fn parse_error(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        GraphError::Parse {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::io_error(err)
    }
}

impl From<glob::PatternError> for GraphError {
    fn from(err: glob::PatternError) -> Self {
        GraphError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::JsonSerialize { source: err }
    }
}

/// Result type alias for pkggraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
