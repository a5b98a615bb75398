//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::Walker;
use crate::error::{GraphError, Result};
use crate::models::analysis::AnalysisResults;
use crate::models::config::Settings;
use crate::output::{create_formatter, create_writer};
use std::path::Path;
use tracing::{debug, info};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Build and print the dependency graph
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Analyze(args)
    }

    /// Resolve the settings this command runs with, merging every
    /// configuration source with the command line last
    pub fn settings(&self) -> Result<Settings> {
        match self {
            Command::Analyze(args) => {
                self.validate()?;
                config::load_config(CliArgs::from(args))
            }
            Command::Init => Ok(Settings::default()),
        }
    }

    /// Execute the command with resolved settings
    pub fn execute(&self, settings: Settings) -> Result<()> {
        match self {
            Command::Analyze(_) => {
                debug!(?settings, "effective settings");
                let results = Self::analyze(settings.clone())?;
                Self::write_results(&settings, &results)
            }
            Command::Init => Self::init(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Run the analysis for fully resolved settings
    pub fn analyze(settings: Settings) -> Result<AnalysisResults> {
        Walker::new(settings).analyze()
    }

    /// Render `results` in the configured format to the configured destination
    pub fn write_results(settings: &Settings, results: &AnalysisResults) -> Result<()> {
        let formatter = create_formatter(settings.output_format, settings.use_colors, settings.quiet);
        let content = formatter.format(results)?;
        create_writer(settings.output_file.as_ref()).write(&content)?;

        if let Some(path) = &settings.output_file {
            info!(path = %path.display(), format = %settings.output_format, "output written");
        }
        Ok(())
    }

    /// Write a default configuration file unless one already exists
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            eprintln!("Configuration file already exists at: {}", path.display());
            eprintln!("To overwrite it, delete the file first and run this command again.");
            return Ok(());
        }

        config::parser::create_default_config(path)?;

        eprintln!("Created default configuration file at: {}", path.display());
        eprintln!("Set `entry` (and `module` if there is no go.mod) to get started.");
        Ok(())
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Analyze(args) => {
                if let Some(root) = &args.root {
                    if !root.is_dir() {
                        return Err(GraphError::InvalidPath { path: root.clone() });
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(GraphError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and handle errors, returning the process exit code
    pub fn run(&self) -> i32 {
        self.run_with(self.settings())
    }

    /// Like [`Command::run`], for settings that were resolved beforehand
    pub fn run_with(&self, settings: Result<Settings>) -> i32 {
        match settings.and_then(|settings| self.execute(settings)) {
            Ok(()) => 0,
            Err(err) => {
                report_error(&err);
                err.exit_code()
            }
        }
    }
}

/// Print an error and, where there is one, a hint for fixing it
pub fn report_error(err: &GraphError) {
    eprintln!("{}: {}", err.severity(), err.user_message());
    if let Some(suggestion) = err.suggestion() {
        eprintln!("hint: {}", suggestion);
    }
}
