//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::stemmer::Language;
use crate::vector::{Weighting, DEFAULT_CAPACITY};

/// File name looked up by [`LexisConfig::discover`](super::LexisConfig::discover)
pub const CONFIG_FILE_NAME: &str = "lexis.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexisConfig {
    /// Language whose stemmer and stop words are used
    #[serde(default = "default_language")]
    pub language: Language,

    /// Drop stop words during tokenization (default true)
    #[serde(default = "default_stop_words")]
    pub stop_words: bool,

    /// Tokens shorter than this many characters are dropped
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    #[serde(default)]
    pub vector: VectorConfig,
}

/// Settings for document vector construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Starting capacity of each document's sparse mapping
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    #[serde(default)]
    pub weighting: Weighting,

    /// Scale every document vector to unit length
    #[serde(default)]
    pub normalize: bool,
}

impl Default for LexisConfig {
    fn default() -> Self {
        LexisConfig {
            language: default_language(),
            stop_words: default_stop_words(),
            min_token_len: default_min_token_len(),
            vector: VectorConfig::default(),
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        VectorConfig {
            initial_capacity: default_initial_capacity(),
            weighting: Weighting::default(),
            normalize: false,
        }
    }
}

fn default_language() -> Language {
    Language::Hungarian
}

fn default_stop_words() -> bool {
    true
}

fn default_min_token_len() -> usize {
    1
}

fn default_initial_capacity() -> usize {
    DEFAULT_CAPACITY
}
