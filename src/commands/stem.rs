//! `lexis stem` command - stem individual words
//!
//! Words come from the command line, or from stdin (split on whitespace) when
//! none are given. Every word is reported, changed or not.

use std::io::{self, BufRead};
use std::sync::Arc;

use serde::Serialize;

use crate::cli::{OutputFormat, StemArgs};
use crate::commands::dispatch::CommandContext;
use lexis_core::error::Result;
use lexis_core::log_stem_stats;
use lexis_core::logging::StemStats;

#[derive(Debug, Serialize)]
struct StemResult {
    word: String,
    stem: String,
    changed: bool,
}

/// Execute the stem command
pub fn execute(ctx: &CommandContext, args: &StemArgs) -> Result<()> {
    let words = if args.words.is_empty() {
        read_words(io::stdin().lock())?
    } else {
        args.words.clone()
    };

    let stats = Arc::new(StemStats::new());
    let mut stemmer = ctx.stemmer(&stats)?;

    let results: Vec<StemResult> = words
        .into_iter()
        .map(|word| {
            let word = if args.lowercase {
                word.to_lowercase()
            } else {
                word
            };
            match stemmer.stem(&word) {
                Some(stem) => StemResult {
                    word,
                    stem,
                    changed: true,
                },
                None => StemResult {
                    stem: word.clone(),
                    word,
                    changed: false,
                },
            }
        })
        .collect();

    log_stem_stats!(&stats, "stem");
    tracing::debug!(elapsed = ?ctx.start.elapsed(), words = results.len(), "stem");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "language": ctx.config.language,
                "stems": results,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for result in &results {
                println!("{} -> {}", result.word, result.stem);
            }
        }
    }

    Ok(())
}

fn read_words(reader: impl BufRead) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        words.extend(line?.split_whitespace().map(str::to_string));
    }
    Ok(words)
}
