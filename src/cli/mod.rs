//! CLI argument parsing for lexis
//!
//! Global flags: --format, --config, --language, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use lexis_core::vector::Weighting;
pub use output::OutputFormat;
use parse::parse_weighting;

/// Lexis - word stemming and sparse term vectors
#[derive(Parser, Debug)]
#[command(name = "lexis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (defaults to ./lexis.toml when present)
    #[arg(long, global = true, env = "LEXIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Language to stem (overrides the configuration)
    #[arg(long, short, global = true, env = "LEXIS_LANGUAGE")]
    pub language: Option<String>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace" or "lexis_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stem words given as arguments, or one word per whitespace-separated token on stdin
    Stem(StemArgs),

    /// Build sparse term vectors, one document per file
    Vectorize(VectorArgs),

    /// Rank file pairs by cosine similarity of their term vectors
    Similar(SimilarArgs),

    /// List supported languages and the engine behind each
    Languages,
}

#[derive(Args, Debug)]
pub struct StemArgs {
    /// Words to stem
    pub words: Vec<String>,

    /// Lowercase words before stemming
    #[arg(long)]
    pub lowercase: bool,
}

#[derive(Args, Debug, Clone)]
pub struct VectorArgs {
    /// Input files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Term weighting (overrides the configuration)
    #[arg(long, value_parser = parse_weighting)]
    pub weighting: Option<Weighting>,

    /// Scale vectors to unit length
    #[arg(long)]
    pub normalize: bool,

    /// Skip stemming (tokens are used as-is)
    #[arg(long)]
    pub no_stem: bool,
}

#[derive(Args, Debug)]
pub struct SimilarArgs {
    #[command(flatten)]
    pub vectors: VectorArgs,

    /// Only report pairs scoring at least this much
    #[arg(long, default_value_t = 0.0)]
    pub min_score: f64,

    /// Report at most this many pairs
    #[arg(long)]
    pub limit: Option<usize>,
}
