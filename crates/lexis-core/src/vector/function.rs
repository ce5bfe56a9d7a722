//! Scalar functions over sparse mappings

use std::cmp::Ordering;

use super::mapping::SparseMapping;

/// Reduces a vector to a single number.
pub trait VectorFunction {
    fn apply(&self, vector: &SparseMapping) -> f64;
}

/// Sum of absolute values
#[derive(Debug, Clone, Copy, Default)]
pub struct L1Norm;

/// Euclidean length
#[derive(Debug, Clone, Copy, Default)]
pub struct L2Norm;

/// Largest stored value, or 0.0 for an empty vector
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct NonZeroCount;

impl VectorFunction for L1Norm {
    fn apply(&self, vector: &SparseMapping) -> f64 {
        vector.values().iter().map(|v| v.abs()).sum()
    }
}

impl VectorFunction for L2Norm {
    fn apply(&self, vector: &SparseMapping) -> f64 {
        vector.values().iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

impl VectorFunction for MaxValue {
    fn apply(&self, vector: &SparseMapping) -> f64 {
        vector
            .values()
            .iter()
            .copied()
            .reduce(f64::max)
            .unwrap_or(0.0)
    }
}

impl VectorFunction for NonZeroCount {
    fn apply(&self, vector: &SparseMapping) -> f64 {
        vector.len() as f64
    }
}

/// Dot product, walking both index lists in ascending order.
pub fn dot(a: &SparseMapping, b: &SparseMapping) -> f64 {
    let (ai, av) = (a.indices(), a.values());
    let (bi, bv) = (b.indices(), b.values());
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < ai.len() && j < bi.len() {
        match ai[i].cmp(&bi[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += av[i] * bv[j];
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

/// Cosine of the angle between two vectors; 0.0 when either is empty.
pub fn cosine_similarity(a: &SparseMapping, b: &SparseMapping) -> f64 {
    let norm_a = L2Norm.apply(a);
    let norm_b = L2Norm.apply(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot(a, b) / (norm_a * norm_b)
}

/// Scale `vector` to unit length. Empty vectors are left alone.
pub fn normalize(vector: &mut SparseMapping) {
    let norm = L2Norm.apply(vector);
    if norm > 0.0 {
        vector.scale(1.0 / norm);
    }
}
