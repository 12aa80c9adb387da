//! # Similarity
//!
//! Pairwise vector comparators used by content addressing.

use ndarray::{ArrayBase, Data, Ix1};

/// Added to the norm product so zero vectors do not divide by zero
pub const SIMILARITY_EPSILON: f64 = 1e-6;

/// Cosine similarity: (a · b) / (‖a‖ ‖b‖ + ε)
///
/// Range is approximately [-1, 1]; near-zero-norm inputs are pulled toward 0
/// by ε.
///
/// # Panics
///
/// If `a` and `b` have different lengths.
pub fn cosine_similarity<S1, S2>(a: &ArrayBase<S1, Ix1>, b: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let dot = a.dot(b);
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();
    dot / (norm_a * norm_b + SIMILARITY_EPSILON)
}
