//! # Optimization Primitives
//!
//! Update rules and gradient clipping over ndarray tensors of any rank.

use ndarray::{Array, ArrayBase, Data, Dimension};

/// SGD step: θ = θ - lr * ∇θ
///
/// # Panics
///
/// If `params` and `gradients` shapes are not broadcast-compatible.
pub fn sgd_step<S1, S2, D>(
    params: &ArrayBase<S1, D>,
    gradients: &ArrayBase<S2, D>,
    learning_rate: f64,
) -> Array<f64, D>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    params - &(gradients * learning_rate)
}

/// Gradient clipping by value: every element clamped into [-max_value, max_value]
///
/// NaN elements stay NaN.
///
/// # Panics
///
/// If `max_value` is negative or NaN.
pub fn clip_grad_value<S, D>(gradients: &ArrayBase<S, D>, max_value: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    gradients.mapv(|g| g.clamp(-max_value, max_value))
}

/// True when any element is NaN
pub fn has_nan<S, D>(values: &ArrayBase<S, D>) -> bool
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.iter().any(|v| v.is_nan())
}
