//! Stemmer façade
//!
//! Every stemmer answers one question: what is the stem of this word? `None` means
//! "unchanged", so callers can keep the original token without an allocation.
//!
//! Hungarian runs on the bundled [`RuleProgram`](crate::snowball::RuleProgram);
//! other languages are served by `rust-stemmers`, and languages without a stemmer
//! get the [`IdentityStemmer`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LexisError, Result};
use crate::logging::StemStats;
use crate::snowball::{hungarian, RuleProgram, SnowballEnv};

/// Reduces inflected words to a stem.
///
/// Implementations keep per-word scratch state, so one instance serves one
/// thread; create one stemmer per worker.
pub trait Stemmer {
    /// The stem of `word`, or `None` when the word is already its own stem.
    fn stem(&mut self, word: &str) -> Option<String>;

    /// The stem of `word`, falling back to the word itself.
    fn stem_or_same(&mut self, word: &str) -> String {
        self.stem(word).unwrap_or_else(|| word.to_string())
    }
}

fn record(stats: Option<&Arc<StemStats>>, changed: bool) {
    if let Some(stats) = stats {
        stats.record(changed);
    }
}

/// Runs a rule program over one word at a time, reusing its buffer.
pub struct SnowballStemmer<C: 'static> {
    program: &'static RuleProgram<C>,
    env: SnowballEnv,
    stats: Option<Arc<StemStats>>,
}

impl<C: Default + 'static> SnowballStemmer<C> {
    /// Validates the program's tables before accepting it.
    pub fn new(program: &'static RuleProgram<C>) -> Result<Self> {
        program.validate()?;
        Ok(SnowballStemmer {
            program,
            env: SnowballEnv::new(),
            stats: None,
        })
    }

    pub fn with_stats(mut self, stats: Arc<StemStats>) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn program(&self) -> &'static RuleProgram<C> {
        self.program
    }
}

impl<C: Default + 'static> Stemmer for SnowballStemmer<C> {
    fn stem(&mut self, word: &str) -> Option<String> {
        self.env.set_current(word);
        let mut ctx = C::default();
        if let Err(err) = self.program.run(&mut self.env, &mut ctx) {
            // The word is kept as-is; a broken program must not take the pipeline down.
            warn!(program = self.program.name, word, error = %err, "stemming aborted");
            if let Some(stats) = &self.stats {
                stats.record_aborted();
            }
            return None;
        }

        let stem = self.env.current();
        let changed = stem != word;
        record(self.stats.as_ref(), changed);
        changed.then(|| stem.to_string())
    }
}

impl<C: 'static> fmt::Debug for SnowballStemmer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("program", &self.program.name)
            .finish_non_exhaustive()
    }
}

/// Leaves every word unchanged.
#[derive(Debug, Default, Clone)]
pub struct IdentityStemmer {
    stats: Option<Arc<StemStats>>,
}

impl IdentityStemmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(mut self, stats: Arc<StemStats>) -> Self {
        self.stats = Some(stats);
        self
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&mut self, _word: &str) -> Option<String> {
        record(self.stats.as_ref(), false);
        None
    }
}

/// A `rust-stemmers` algorithm behind the [`Stemmer`] contract.
pub struct LibraryStemmer {
    language: Language,
    inner: rust_stemmers::Stemmer,
    stats: Option<Arc<StemStats>>,
}

impl LibraryStemmer {
    pub fn new(language: Language) -> Result<Self> {
        let algorithm = language
            .algorithm()
            .ok_or_else(|| LexisError::UnknownLanguage(language.to_string()))?;
        Ok(LibraryStemmer {
            language,
            inner: rust_stemmers::Stemmer::create(algorithm),
            stats: None,
        })
    }

    pub fn with_stats(mut self, stats: Arc<StemStats>) -> Self {
        self.stats = Some(stats);
        self
    }
}

impl Stemmer for LibraryStemmer {
    fn stem(&mut self, word: &str) -> Option<String> {
        let stem = self.inner.stem(word);
        let changed = stem != word;
        record(self.stats.as_ref(), changed);
        changed.then(|| stem.into_owned())
    }
}

impl fmt::Debug for LibraryStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibraryStemmer")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// What backs a language's stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// A rule program run by this crate's automaton
    Snowball,
    /// The `rust-stemmers` crate
    Library,
    /// No stemming
    Identity,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Snowball => write!(f, "snowball"),
            Engine::Library => write!(f, "library"),
            Engine::Identity => write!(f, "identity"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hungarian,
    Danish,
    Dutch,
    English,
    Estonian,
    Finnish,
    French,
    German,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 16] = [
        Language::Hungarian,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Estonian,
        Language::Finnish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Norwegian,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Swedish,
        Language::Turkish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hungarian => "hungarian",
            Language::Danish => "danish",
            Language::Dutch => "dutch",
            Language::English => "english",
            Language::Estonian => "estonian",
            Language::Finnish => "finnish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Norwegian => "norwegian",
            Language::Portuguese => "portuguese",
            Language::Romanian => "romanian",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::Swedish => "swedish",
            Language::Turkish => "turkish",
        }
    }

    /// Comma-separated list of every accepted language name
    pub fn supported_names() -> String {
        Language::ALL
            .iter()
            .map(Language::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn engine(&self) -> Engine {
        match self {
            Language::Hungarian => Engine::Snowball,
            Language::Estonian => Engine::Identity,
            _ => Engine::Library,
        }
    }

    fn algorithm(&self) -> Option<Algorithm> {
        let algorithm = match self {
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Romanian => Algorithm::Romanian,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
            Language::Turkish => Algorithm::Turkish,
            Language::Hungarian | Language::Estonian => return None,
        };
        Some(algorithm)
    }
}

impl FromStr for Language {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.as_str() == name)
            .ok_or_else(|| LexisError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Build the stemmer for `language`.
pub fn create_stemmer(language: Language) -> Result<Box<dyn Stemmer + Send>> {
    create_stemmer_with_stats(language, None)
}

/// Build the stemmer for `language`, recording every call in `stats`.
pub fn create_stemmer_with_stats(
    language: Language,
    stats: Option<Arc<StemStats>>,
) -> Result<Box<dyn Stemmer + Send>> {
    let stemmer: Box<dyn Stemmer + Send> = match (language.engine(), stats) {
        (Engine::Snowball, None) => Box::new(SnowballStemmer::new(hungarian::program())?),
        (Engine::Snowball, Some(stats)) => {
            Box::new(SnowballStemmer::new(hungarian::program())?.with_stats(stats))
        }
        (Engine::Library, None) => Box::new(LibraryStemmer::new(language)?),
        (Engine::Library, Some(stats)) => {
            Box::new(LibraryStemmer::new(language)?.with_stats(stats))
        }
        (Engine::Identity, None) => Box::new(IdentityStemmer::new()),
        (Engine::Identity, Some(stats)) => Box::new(IdentityStemmer::new().with_stats(stats)),
    };
    Ok(stemmer)
}
