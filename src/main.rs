use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use proggy::cli::{Cli, Commands, ConfigCommands};
use proggy::Config;

mod commands;

/// Send logs to `path`. Nothing is logged to the terminal the bars use.
#[cfg(not(tarpaulin_include))]
fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let log_file = cli.log_file.as_ref().or(config.logging.file.as_ref());
    if let Some(path) = log_file {
        let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
        init_logging(path, level)?;
    }

    match cli.command {
        Commands::Render(args) => commands::render::handle(&config, &args),
        Commands::Demo(args) => commands::demo::handle(&config, &args),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(),
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
