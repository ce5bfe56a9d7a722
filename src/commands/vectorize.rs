//! `lexis vectorize` command - print the vocabulary and one sparse vector per file

use crate::cli::{OutputFormat, VectorArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::documents::{self, Corpus};
use lexis_core::error::Result;

/// Execute the vectorize command
pub fn execute(ctx: &CommandContext, args: &VectorArgs) -> Result<()> {
    let corpus = documents::load(ctx, args)?;

    match ctx.cli.format {
        OutputFormat::Json => output_json(ctx, &corpus)?,
        OutputFormat::Human => output_human(ctx, &corpus),
    }

    Ok(())
}

fn output_json(ctx: &CommandContext, corpus: &Corpus) -> Result<()> {
    let documents: Vec<_> = corpus
        .paths
        .iter()
        .zip(&corpus.vectors)
        .map(|(path, vector)| {
            serde_json::json!({
                "path": path.display().to_string(),
                "vector": vector,
            })
        })
        .collect();

    let output = serde_json::json!({
        "language": ctx.config.language,
        "weighting": corpus.weighting,
        "vocabulary": corpus.documents.vocabulary().terms(),
        "documents": documents,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, corpus: &Corpus) {
    if !ctx.cli.quiet {
        println!(
            "Vocabulary ({} terms, {} weighting):",
            corpus.documents.vocabulary().len(),
            corpus.weighting
        );
        for (index, term) in corpus.documents.vocabulary().terms().iter().enumerate() {
            println!("  {index:>4}  {term}");
        }
        println!();
    }
    for (path, vector) in corpus.paths.iter().zip(&corpus.vectors) {
        println!("{}: {}", path.display(), vector);
    }
}
