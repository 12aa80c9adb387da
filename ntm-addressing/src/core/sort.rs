//! Index sorting helpers

use std::cmp::Ordering;

use ndarray::{Array1, ArrayBase, Data, Ix1};

/// Indices that would sort `values` ascending
///
/// Ties keep their original order. NaN entries sort after every number.
pub fn argsort(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| nan_last(values[a], values[b]));
    indices
}

/// [`argsort`] over an ndarray vector
pub fn argsort_array<S>(values: &ArrayBase<S, Ix1>) -> Array1<usize>
where
    S: Data<Elem = f64>,
{
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| nan_last(values[a], values[b]));
    Array1::from(indices)
}

fn nan_last(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
