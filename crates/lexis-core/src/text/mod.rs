//! Tokenization front-end feeding the stemmers

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::LexisConfig;
use crate::stemmer::{Language, Stemmer};

static ENGLISH_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
static HUNGARIAN_STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn english_stop_words() -> &'static HashSet<&'static str> {
    ENGLISH_STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into",
            "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then",
            "there", "these", "they", "this", "to", "was", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn hungarian_stop_words() -> &'static HashSet<&'static str> {
    HUNGARIAN_STOP_WORDS.get_or_init(|| {
        [
            "a", "az", "egy", "és", "hogy", "is", "de", "nem", "meg", "ez", "azt", "ami", "mint",
            "vagy", "csak", "már", "még", "van", "volt", "lesz", "által", "ha", "pedig", "után",
            "között", "mert", "sem", "ezt", "itt", "ott", "nagyon",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Stop words for `language`; `None` when none are bundled.
pub fn stop_words(language: Language) -> Option<&'static HashSet<&'static str>> {
    match language {
        Language::English => Some(english_stop_words()),
        Language::Hungarian => Some(hungarian_stop_words()),
        _ => None,
    }
}

/// Tokenizer settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizeOptions {
    pub language: Language,
    pub stop_words: bool,
    /// Minimum token length in characters
    pub min_token_len: usize,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TokenizeOptions::from(&LexisConfig::default())
    }
}

impl From<&LexisConfig> for TokenizeOptions {
    fn from(config: &LexisConfig) -> Self {
        TokenizeOptions {
            language: config.language,
            stop_words: config.stop_words,
            min_token_len: config.min_token_len,
        }
    }
}

/// Lowercase `text` and split it on non-alphanumeric characters, dropping stop
/// words and short tokens.
pub fn tokenize(text: &str, options: &TokenizeOptions) -> Vec<String> {
    let excluded = if options.stop_words {
        stop_words(options.language)
    } else {
        None
    };
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .filter(|s| s.chars().count() >= options.min_token_len)
        .filter(|s| !excluded.is_some_and(|words| words.contains(s)))
        .map(|s| s.to_string())
        .collect()
}

/// [`tokenize`], then replace each token with its stem.
pub fn tokenize_with_stemmer(
    text: &str,
    options: &TokenizeOptions,
    stemmer: &mut dyn Stemmer,
) -> Vec<String> {
    tokenize(text, options)
        .into_iter()
        .map(|token| stemmer.stem(&token).unwrap_or(token))
        .collect()
}
