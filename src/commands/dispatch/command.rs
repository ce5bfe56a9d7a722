//! Command trait and context for dispatching commands

use std::sync::Arc;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{languages, similar, stem, vectorize};
use lexis_core::config::LexisConfig;
use lexis_core::error::Result;
use lexis_core::logging::StemStats;
use lexis_core::stemmer::{create_stemmer_with_stats, Stemmer};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: LexisConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: LexisConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Stemmer for the configured language, counting into `stats`
    pub fn stemmer(&self, stats: &Arc<StemStats>) -> Result<Box<dyn Stemmer + Send>> {
        create_stemmer_with_stats(self.config.language, Some(Arc::clone(stats)))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Stem(args) => stem::execute(ctx, args),
            Commands::Vectorize(args) => vectorize::execute(ctx, args),
            Commands::Similar(args) => similar::execute(ctx, args),
            Commands::Languages => languages::execute(ctx),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("lexis {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Word stemming and sparse term vectors.");
        println!();
        println!("Run `lexis --help` for usage information.");
        Ok(())
    }
}
