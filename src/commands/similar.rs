//! `lexis similar` command - pairwise cosine similarity between files

use crate::cli::{OutputFormat, SimilarArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::documents;
use lexis_core::bail_usage;
use lexis_core::error::Result;
use lexis_core::vector::{pairwise_similarity, SimilarityPair};

/// Execute the similar command
pub fn execute(ctx: &CommandContext, args: &SimilarArgs) -> Result<()> {
    if args.vectors.files.len() < 2 {
        bail_usage!("similar needs at least two files");
    }

    let corpus = documents::load(ctx, &args.vectors)?;

    let pairs: Vec<SimilarityPair> = pairwise_similarity(&corpus.vectors)
        .into_iter()
        .filter(|pair| pair.score >= args.min_score)
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    tracing::debug!(elapsed = ?ctx.start.elapsed(), pairs = pairs.len(), "similar");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = pairs
                .iter()
                .map(|pair| {
                    serde_json::json!({
                        "left": corpus.paths[pair.left].display().to_string(),
                        "right": corpus.paths[pair.right].display().to_string(),
                        "score": pair.score,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if pairs.is_empty() && !ctx.cli.quiet {
                println!("No similar pairs found");
            }
            for pair in &pairs {
                println!(
                    "{:.4}  {}  {}",
                    pair.score,
                    corpus.paths[pair.left].display(),
                    corpus.paths[pair.right].display()
                );
            }
        }
    }

    Ok(())
}
