//! `lexis languages` command - list supported languages

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use lexis_core::error::Result;
use lexis_core::stemmer::Language;

/// Execute the languages command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = Language::ALL
                .iter()
                .map(|language| {
                    serde_json::json!({
                        "name": language,
                        "engine": language.engine(),
                        "default": *language == ctx.config.language,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for language in Language::ALL {
                let marker = if language == ctx.config.language {
                    " *"
                } else {
                    ""
                };
                println!("{:<12} {}{}", language.as_str(), language.engine(), marker);
            }
        }
    }
    Ok(())
}
