//! Command dispatch logic for lexis

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use lexis_core::config::LexisConfig;
use lexis_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = resolve_config(cli)?;

    debug!(elapsed = ?start.elapsed(), language = %config.language, "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Explicit `--config`, else `lexis.toml` in the working directory, else defaults;
/// `--language` wins over whichever was loaded.
fn resolve_config(cli: &Cli) -> Result<LexisConfig> {
    let mut config = match &cli.config {
        Some(path) => LexisConfig::load(path)?,
        None => LexisConfig::discover(&env::current_dir()?)?,
    };
    if let Some(language) = &cli.language {
        config.language = language.parse()?;
    }
    Ok(config)
}
