//! Sparse term vectors

pub mod document;
pub mod function;
pub mod mapping;

pub use document::{pairwise_similarity, DocumentVectors, SimilarityPair, Vocabulary, Weighting};
pub use function::{
    cosine_similarity, dot, normalize, L1Norm, L2Norm, MaxValue, NonZeroCount, VectorFunction,
};
pub use mapping::{SparseMapping, DEFAULT_CAPACITY};
