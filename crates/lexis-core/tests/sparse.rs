//! Laws of the sparse mapping and the vectors built on it

use lexis_core::stemmer::{create_stemmer, Language};
use lexis_core::text::{tokenize_with_stemmer, TokenizeOptions};
use lexis_core::vector::{
    cosine_similarity, pairwise_similarity, DocumentVectors, L2Norm, SparseMapping,
    VectorFunction, Weighting,
};

#[test]
fn test_set_then_clear() {
    let mut mapping = SparseMapping::new();
    mapping.set(5, 3.0);
    mapping.set(5, 0.0);
    assert_eq!(mapping.len(), 0);
    assert_eq!(mapping.get(5), 0.0);
}

#[test]
fn test_last_write_wins_in_order() {
    let mut mapping = SparseMapping::new();
    mapping.set(7, 1.0);
    mapping.set(2, 2.0);
    mapping.set(9, 3.0);
    mapping.set(2, 4.0);
    assert_eq!(mapping.indices(), &[2, 7, 9]);
    assert_eq!(mapping.values(), &[4.0, 1.0, 3.0]);
}

#[test]
fn test_get_matches_last_set_for_mixed_sequence() {
    // Deterministic pseudo-random sequence of writes, including zeros.
    let mut mapping = SparseMapping::with_capacity(1);
    let mut expected = [0.0f64; 32];
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let index = (state % 32) as usize;
        let value = if state % 5 == 0 {
            0.0
        } else {
            (state % 100) as f64 - 50.0
        };
        mapping.set(index, value);
        expected[index] = value;

        assert!(mapping.indices().windows(2).all(|w| w[0] < w[1]));
        assert!(mapping.len() <= mapping.capacity());
    }
    for (index, value) in expected.iter().enumerate() {
        assert_eq!(mapping.get(index), *value, "index {index}");
    }
    assert_eq!(
        mapping.len(),
        expected.iter().filter(|v| **v != 0.0).count()
    );
}

#[test]
fn test_inflected_documents_become_similar_after_stemming() {
    let options = TokenizeOptions::default();
    let mut stemmer = create_stemmer(Language::Hungarian).unwrap();
    let mut docs = DocumentVectors::default();
    docs.add_document(tokenize_with_stemmer(
        "A házak és a kertek",
        &options,
        stemmer.as_mut(),
    ));
    docs.add_document(tokenize_with_stemmer(
        "házban, kertekben",
        &options,
        stemmer.as_mut(),
    ));

    assert_eq!(docs.vocabulary().terms(), &["ház", "kert"]);
    let vectors = docs.weighted(Weighting::Tf, true);
    assert!((cosine_similarity(&vectors[0], &vectors[1]) - 1.0).abs() < 1e-9);
    assert!((L2Norm.apply(&vectors[0]) - 1.0).abs() < 1e-9);

    let pairs = pairwise_similarity(&vectors);
    assert_eq!(pairs.len(), 1);
    assert_eq!((pairs[0].left, pairs[0].right), (0, 1));
}
