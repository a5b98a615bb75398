use pkggraph::cli::{Args, Command};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let command = Command::from_args(Args::parse_args());

    // Settings are resolved first so config files and env can pick the log level
    let settings = command.settings();
    init_logging(settings.as_ref().map_or("warn", |settings| settings.log_level()));
    debug!("{} v{}", pkggraph::NAME, pkggraph::VERSION);

    process::exit(command.run_with(settings));
}

/// Log to stderr; stdout carries the graph. `RUST_LOG` wins over the settings.
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
