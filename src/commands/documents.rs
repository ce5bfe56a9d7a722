//! Shared document loading for `vectorize` and `similar`

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::VectorArgs;
use crate::commands::dispatch::CommandContext;
use lexis_core::error::{LexisError, Result};
use lexis_core::logging::StemStats;
use lexis_core::text::{tokenize, tokenize_with_stemmer, TokenizeOptions};
use lexis_core::vector::{DocumentVectors, SparseMapping, Weighting};
use lexis_core::{log_stem_stats, trace_time};

/// Documents read from files, with their weighted vectors
pub struct Corpus {
    pub paths: Vec<PathBuf>,
    pub documents: DocumentVectors,
    pub vectors: Vec<SparseMapping>,
    pub weighting: Weighting,
}

/// Read, tokenize and vectorize every file in `args`
pub fn load(ctx: &CommandContext, args: &VectorArgs) -> Result<Corpus> {
    let start = Instant::now();
    let options = TokenizeOptions::from(&ctx.config);
    let stats = Arc::new(StemStats::new());
    let mut stemmer = ctx.stemmer(&stats)?;
    let mut documents = DocumentVectors::new(ctx.config.vector.initial_capacity);

    for path in &args.files {
        let text = fs::read_to_string(path)
            .map_err(|e| LexisError::io_operation("read", path.display(), e))?;
        let tokens = if args.no_stem {
            tokenize(&text, &options)
        } else {
            tokenize_with_stemmer(&text, &options, stemmer.as_mut())
        };
        tracing::debug!(path = %path.display(), tokens = tokens.len(), "document");
        documents.add_document(tokens);
    }

    log_stem_stats!(&stats, "vectorize");

    let weighting = args.weighting.unwrap_or(ctx.config.vector.weighting);
    let normalize = args.normalize || ctx.config.vector.normalize;
    let vectors = documents.weighted(weighting, normalize);

    trace_time!(
        start,
        "load_documents",
        documents = documents.len(),
        terms = documents.vocabulary().len()
    );

    Ok(Corpus {
        paths: args.files.clone(),
        documents,
        vectors,
        weighting,
    })
}
