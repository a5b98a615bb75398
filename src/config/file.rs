//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{GraphError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".pkggraph.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "PKGGRAPH";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(GraphError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

const ENV_KEYS: [&str; 9] = [
    "ENTRY",
    "MODULE",
    "ROOT",
    "EXCLUDE",
    "OUTPUT_FORMAT",
    "OUTPUT_FILE",
    "INCLUDE_TESTS",
    "VERBOSE",
    "QUIET",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    /// Build settings from `<PREFIX>_<KEY>` variables as seen through `lookup`
    pub fn load_with<F>(&self, lookup: F) -> Result<PartialSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(&format!("{}_{}", self.prefix, key));
        let mut settings = PartialSettings {
            entry: var("ENTRY"),
            module: var("MODULE"),
            root: var("ROOT").map(PathBuf::from),
            output_file: var("OUTPUT_FILE").map(PathBuf::from),
            ..Default::default()
        };

        if let Some(exclude) = var("EXCLUDE") {
            settings.exclude_patterns = Some(
                exclude
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            );
        }

        if let Some(format) = var("OUTPUT_FORMAT") {
            let output_format = format.parse().map_err(|e: String| GraphError::Config {
                message: format!("{}_OUTPUT_FORMAT: {}", self.prefix, e),
            })?;
            settings.output_format = Some(output_format);
        }

        settings.include_tests = self.bool_var(&var, "INCLUDE_TESTS")?;
        settings.verbose = self.bool_var(&var, "VERBOSE")?;
        settings.quiet = self.bool_var(&var, "QUIET")?;

        Ok(settings)
    }

    fn bool_var<F>(&self, var: F, key: &str) -> Result<Option<bool>>
    where
        F: Fn(&str) -> Option<String>,
    {
        var(key)
            .map(|value| {
                parse_bool(&value).ok_or_else(|| GraphError::Config {
                    message: format!(
                        "{}_{}: expected true or false, got '{}'",
                        self.prefix, key, value
                    ),
                })
            })
            .transpose()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        self.load_with(|key| std::env::var(key).ok())
    }

    fn is_available(&self) -> bool {
        ENV_KEYS
            .iter()
            .any(|key| std::env::var(format!("{}_{}", self.prefix, key)).is_ok())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
