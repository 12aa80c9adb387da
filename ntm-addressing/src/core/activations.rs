//! # Gate Functions
//!
//! Transforms mapping raw controller outputs into the ranges the addressing
//! math needs.
//!
//! ## Functions
//!
//! | Function | Range | Description |
//! |----------|-------|-------------|
//! | `sigmoid` | (0, 1) | Logistic sigmoid |
//! | `one_plus` | [1, ∞) | 1 + softplus, strictly positive gain |
//! | `softmax` | simplex | Max-shifted softmax over a vector |
//! | `softmax_axis` | simplex per lane | Softmax along one axis |
//!
//! ## Implementation Notes
//!
//! Each scalar gate has an `_array` twin that maps it over any ndarray
//! dimension. Extreme inputs overflow to inf/NaN exactly as IEEE-754 dictates.

use ndarray::{Array, Array1, ArrayBase, Axis, Data, Dimension, Ix1};

/// Sigmoid activation: 1 / (1 + e^(-x))
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid applied elementwise
pub fn sigmoid_array<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(sigmoid)
}

/// One-plus gate: 1 + ln(1 + e^x)
///
/// Differentiable everywhere, unlike a hard floor at 1.
#[inline]
pub fn one_plus(x: f64) -> f64 {
    1.0 + (1.0 + x.exp()).ln()
}

/// One-plus applied elementwise
pub fn one_plus_array<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(one_plus)
}

/// Softmax: e^(xi - max) / Σ e^(xj - max)
pub fn softmax<S>(x: &ArrayBase<S, Ix1>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    softmax_axis(x, Axis(0))
}

/// Softmax along `axis`, each lane normalized independently
///
/// # Panics
///
/// If `axis` is out of bounds for `x`.
pub fn softmax_axis<S, D>(x: &ArrayBase<S, D>, axis: Axis) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut result = x.to_owned();

    for mut lane in result.lanes_mut(axis) {
        // Find max for numerical stability
        let max = lane.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        lane.mapv_inplace(|v| (v - max).exp());

        let sum = lane.sum();
        lane.mapv_inplace(|v| v / sum);
    }

    result
}
