//! Per-document term vectors

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::function::{cosine_similarity, normalize};
use super::mapping::SparseMapping;
use crate::error::LexisError;

/// Assigns each distinct term a dense index in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `term`, assigning the next free one if it is new.
    pub fn intern(&mut self, term: &str) -> usize {
        if let Some(&index) = self.lookup.get(term) {
            return index;
        }
        let index = self.terms.len();
        self.terms.push(term.to_string());
        self.lookup.insert(term.to_string(), index);
        index
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.lookup.get(term).copied()
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in index order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}

/// How raw term counts are turned into vector weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// Raw term frequency
    #[default]
    Tf,
    /// Term frequency times smoothed inverse document frequency
    TfIdf,
}

impl FromStr for Weighting {
    type Err = LexisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tf" => Ok(Weighting::Tf),
            "tfidf" | "tf-idf" => Ok(Weighting::TfIdf),
            other => Err(LexisError::invalid_value(
                "weighting (expected tf or tfidf)",
                other,
            )),
        }
    }
}

impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weighting::Tf => write!(f, "tf"),
            Weighting::TfIdf => write!(f, "tfidf"),
        }
    }
}

/// Term-count vectors for a collection of documents sharing one vocabulary.
#[derive(Debug, Clone)]
pub struct DocumentVectors {
    vocabulary: Vocabulary,
    counts: Vec<SparseMapping>,
    document_frequency: Vec<usize>,
    initial_capacity: usize,
}

impl Default for DocumentVectors {
    fn default() -> Self {
        Self::new(super::mapping::DEFAULT_CAPACITY)
    }
}

impl DocumentVectors {
    /// `initial_capacity` is the starting capacity of each document's mapping.
    pub fn new(initial_capacity: usize) -> Self {
        DocumentVectors {
            vocabulary: Vocabulary::new(),
            counts: Vec::new(),
            document_frequency: Vec::new(),
            initial_capacity,
        }
    }

    /// Add one document given its (already normalised) terms. Returns the
    /// document's position.
    pub fn add_document<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = SparseMapping::with_capacity(self.initial_capacity);
        for term in terms {
            let index = self.vocabulary.intern(term.as_ref());
            counts.add(index, 1.0);
        }

        self.document_frequency.resize(self.vocabulary.len(), 0);
        for &index in counts.indices() {
            self.document_frequency[index] += 1;
        }

        self.counts.push(counts);
        self.counts.len() - 1
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Raw term counts, one mapping per document
    pub fn counts(&self) -> &[SparseMapping] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of documents containing the term at `index`
    pub fn document_frequency(&self, index: usize) -> usize {
        self.document_frequency.get(index).copied().unwrap_or(0)
    }

    /// Smoothed inverse document frequency, `ln((N + 1) / (df + 1)) + 1`.
    pub fn idf(&self, index: usize) -> f64 {
        let total_docs = self.counts.len() as f64;
        let df = self.document_frequency(index) as f64;
        ((total_docs + 1.0) / (df + 1.0)).ln() + 1.0
    }

    /// Weighted copies of the document vectors.
    #[tracing::instrument(
        skip(self),
        fields(documents = self.counts.len(), terms = self.vocabulary.len())
    )]
    pub fn weighted(&self, weighting: Weighting, unit_length: bool) -> Vec<SparseMapping> {
        self.counts
            .iter()
            .map(|counts| {
                let mut vector = match weighting {
                    Weighting::Tf => counts.clone(),
                    Weighting::TfIdf => counts
                        .iter()
                        .map(|(index, tf)| (index, tf * self.idf(index)))
                        .collect(),
                };
                if unit_length {
                    normalize(&mut vector);
                }
                vector
            })
            .collect()
    }
}

/// One entry of a pairwise similarity table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityPair {
    pub left: usize,
    pub right: usize,
    pub score: f64,
}

/// Cosine similarity of every unordered pair of vectors, highest first.
pub fn pairwise_similarity(vectors: &[SparseMapping]) -> Vec<SimilarityPair> {
    let mut pairs = Vec::new();
    for (left, a) in vectors.iter().enumerate() {
        for (offset, b) in vectors[left + 1..].iter().enumerate() {
            pairs.push(SimilarityPair {
                left,
                right: left + 1 + offset,
                score: cosine_similarity(a, b),
            });
        }
    }
    pairs.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.left.cmp(&b.left))
            .then(a.right.cmp(&b.right))
    });
    pairs
}
