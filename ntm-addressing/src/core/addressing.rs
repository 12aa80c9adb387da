//! # Content Addressing
//!
//! Compares a controller key against every row of the memory matrix and turns
//! the similarities into attention weights over memory locations.
//!
//! ```text
//! s_i = cosine(M_i, k)
//! w_i = exp(β · s_i)
//! r_i = w_i / Σ_j w_j + ε
//! ```
//!
//! ## Numerical Notes
//!
//! ε is added to every weight after normalization, so `r` sums to `1 + N·ε`
//! rather than exactly 1.
//!
//! β is expected to be non-negative (usually the output of
//! [`one_plus`](super::activations::one_plus)). It is not validated. A zero
//! normalizer yields inf/NaN weights.

use ndarray::{Array1, ArrayBase, ArrayView2, Data, Ix1, Ix2};

use super::activations::one_plus;
use super::similarity::cosine_similarity;

/// Smoothing bias added to every attention weight after normalization
pub const LOOKUP_EPSILON: f64 = 1e-6;

/// Content lookup for a single read/write head
///
/// # Arguments
/// * `memory` - Memory matrix (N x W)
/// * `key` - Key emitted by the controller (W)
/// * `beta` - Key strength. β≈1 gives nearly uniform attention, β≈100
///   singles out the closest matching row.
///
/// # Returns
/// Attention weights over the N memory locations.
pub fn content_lookup<S1, S2>(
    memory: &ArrayBase<S1, Ix2>,
    key: &ArrayBase<S2, Ix1>,
    beta: f64,
) -> Array1<f64>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let locations: Array1<f64> = memory
        .outer_iter()
        .map(|row| (cosine_similarity(&row, key) * beta).exp())
        .collect();

    let total = locations.sum();
    tracing::trace!(rows = memory.nrows(), beta, total, "content lookup");

    locations.mapv(|w| w / total + LOOKUP_EPSILON)
}

/// Inputs of one content lookup, bundled explicitly
#[derive(Debug, Clone)]
pub struct AddressingContext<'a> {
    /// Memory matrix (N x W), borrowed read-only
    pub memory: ArrayView2<'a, f64>,
    /// Controller key (W)
    pub key: Array1<f64>,
    /// Focus strength β
    pub beta: f64,
}

impl<'a> AddressingContext<'a> {
    pub fn new(memory: ArrayView2<'a, f64>, key: Array1<f64>, beta: f64) -> Self {
        Self { memory, key, beta }
    }

    /// Build from an unconstrained controller scalar, gating it through
    /// `one_plus` so β ≥ 1
    pub fn from_raw_strength(memory: ArrayView2<'a, f64>, key: Array1<f64>, raw: f64) -> Self {
        Self::new(memory, key, one_plus(raw))
    }

    /// Number of addressable locations
    pub fn locations(&self) -> usize {
        self.memory.nrows()
    }

    /// Run the lookup
    pub fn lookup(&self) -> Array1<f64> {
        content_lookup(&self.memory, &self.key, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::similarity::cosine_similarity;
    use ndarray::{array, Array2};

    #[test]
    fn test_output_length() {
        let memory = Array2::from_shape_fn((7, 4), |(i, j)| (i * 4 + j) as f64 * 0.1 - 1.0);
        let key = array![0.5, -0.25, 1.0, 0.0];
        assert_eq!(content_lookup(&memory, &key, 3.0).len(), 7);
    }

    #[test]
    fn test_reference_example() {
        let memory = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let key = array![1.0, 0.0];
        let r = content_lookup(&memory, &key, 10.0);

        assert!(r[0] > r[2] && r[2] > r[1], "ordering violated: {:?}", r);
        assert!(r[0] > 0.9);
        assert!(r[1] < 1e-3);
        assert!(r[2] > LOOKUP_EPSILON);
    }

    #[test]
    fn test_matches_formula() {
        let memory = array![[0.2, 0.9, -0.4], [1.0, 1.0, 1.0]];
        let key = array![0.1, 0.5, 0.3];
        let beta = 2.5;

        let w: Vec<f64> = memory
            .outer_iter()
            .map(|row| (cosine_similarity(&row, &key) * beta).exp())
            .collect();
        let total: f64 = w.iter().sum();

        let r = content_lookup(&memory, &key, beta);
        for (i, wi) in w.iter().enumerate() {
            assert!((r[i] - (wi / total + LOOKUP_EPSILON)).abs() < 1e-15);
        }
    }

    #[test]
    fn test_epsilon_after_normalization() {
        let memory = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [-1.0, 0.5]];
        let key = array![0.3, 0.7];
        let r = content_lookup(&memory, &key, 4.0);
        let expected = 1.0 + memory.nrows() as f64 * LOOKUP_EPSILON;
        assert!((r.sum() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_beta_is_uniform() {
        let memory = array![[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0], [2.0, 3.0]];
        let key = array![1.0, 2.0];
        let r = content_lookup(&memory, &key, 0.0);
        for &v in r.iter() {
            assert!((v - (0.25 + LOOKUP_EPSILON)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_large_beta_concentrates() {
        let memory = array![[0.0, 1.0], [1.0, 0.1], [-1.0, 0.0]];
        let key = array![1.0, 0.0];
        let r = content_lookup(&memory, &key, 500.0);
        assert!((r[1] - (1.0 + LOOKUP_EPSILON)).abs() < 1e-6);
        assert!((r[0] - LOOKUP_EPSILON).abs() < 1e-6);
        assert!((r[2] - LOOKUP_EPSILON).abs() < 1e-6);
    }

    #[test]
    fn test_nan_beta_propagates() {
        let memory = array![[1.0, 0.0], [0.0, 1.0]];
        let key = array![1.0, 0.0];
        let r = content_lookup(&memory, &key, f64::NAN);
        assert!(r.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_memory_not_mutated() {
        let memory = array![[1.0, 2.0], [3.0, 4.0]];
        let snapshot = memory.clone();
        let _ = content_lookup(&memory.view(), &array![1.0, 1.0], 5.0);
        assert_eq!(memory, snapshot);
    }

    #[test]
    fn test_context_lookup() {
        let memory = array![[1.0, 0.0], [0.0, 1.0]];
        let ctx = AddressingContext::from_raw_strength(memory.view(), array![0.0, 1.0], 0.0);

        assert_eq!(ctx.locations(), 2);
        assert!((ctx.beta - one_plus(0.0)).abs() < 1e-15);

        let r = ctx.lookup();
        assert_eq!(r, content_lookup(&memory, &array![0.0, 1.0], one_plus(0.0)));
        assert!(r[1] > r[0]);
    }
}
