//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub entry: Option<String>,
    pub module: Option<String>,
    pub root: Option<PathBuf>,
    pub exclude: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub include_tests: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub config: Option<PathBuf>,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(format: CliOutputFormat) -> Self {
        match format {
            CliOutputFormat::Dot => OutputFormat::Dot,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Text => OutputFormat::Text,
        }
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            entry: args.entry.clone(),
            module: args.module.clone(),
            root: args.root.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            output_format: args.output.map(OutputFormat::from),
            output_file: args.output_file.clone(),
            include_tests: args.include_tests,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            entry: self.args.entry.clone(),
            module: self.args.module.clone(),
            root: self.args.root.clone(),
            exclude_patterns: self.args.exclude.clone(),
            output_format: self.args.output_format,
            output_file: self.args.output_file.clone(),
            ..Default::default()
        };

        // Flags only override other sources when given
        if self.args.include_tests {
            settings.include_tests = Some(true);
        }
        if self.args.quiet {
            settings.quiet = Some(true);
        }
        if self.args.verbose {
            settings.verbose = Some(true);
        }
        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_config_source() {
        let args = CliArgs {
            entry: Some("cmd".to_string()),
            root: Some(PathBuf::from("/cli/root")),
            exclude: Some(vec!["vendor/*".to_string()]),
            output_format: Some(OutputFormat::Json),
            verbose: true,
            ..Default::default()
        };

        let cli_config = CliConfig::new(args);
        assert!(cli_config.is_available());
        assert_eq!(cli_config.priority(), 30);

        let settings = cli_config.load().unwrap();

        assert_eq!(settings.entry.as_deref(), Some("cmd"));
        assert_eq!(settings.root, Some(PathBuf::from("/cli/root")));
        assert_eq!(settings.exclude_patterns, Some(vec!["vendor/*".to_string()]));
        assert_eq!(settings.output_format, Some(OutputFormat::Json));
        assert_eq!(settings.verbose, Some(true));
        assert_eq!(settings.quiet, None);
        assert_eq!(settings.include_tests, None);
    }

    #[test]
    fn test_from_args() {
        let args = Args::parse_from([
            "pkggraph",
            "--entry",
            "cmd/server",
            "--module",
            "example.com/project",
            "--output",
            "text",
            "--output-file",
            "deps.txt",
            "--include-tests",
            "--no-colors",
            "--config",
            "custom.toml",
        ]);

        let cli_args = CliArgs::from(&args);
        assert_eq!(cli_args.config, Some(PathBuf::from("custom.toml")));

        let settings = CliConfig::new(cli_args).load().unwrap();
        assert_eq!(settings.entry.as_deref(), Some("cmd/server"));
        assert_eq!(settings.module.as_deref(), Some("example.com/project"));
        assert_eq!(settings.output_format, Some(OutputFormat::Text));
        assert_eq!(settings.output_file, Some(PathBuf::from("deps.txt")));
        assert_eq!(settings.include_tests, Some(true));
        assert_eq!(settings.use_colors, Some(false));
        assert!(settings.exclude_patterns.is_none());
        assert!(settings.root.is_none());
    }
}
