//! Toolkit to diagnose exploding or vanishing gradients
//!
//! Wraps an [`Optimizer`]: drops `(gradient, variable)` pairs with a missing
//! side, clips every remaining gradient elementwise, and reports variables
//! whose gradient comes back NaN.

use ndarray::ArrayD;

use super::{gradient_fn, Feed, GradientFn, GradientGraph, Optimizer};
use crate::config::ToolkitConfig;
use crate::core::optim::{clip_grad_value, has_nan};
use crate::error::Result;
use crate::variables::{VariableId, VariableStore};

/// Gradient clipping and NaN diagnostics around an optimizer
pub struct GradientToolkit<O: Optimizer> {
    optimizer: O,
    config: ToolkitConfig,
    filtered_grads_and_vars: Vec<(GradientFn, VariableId)>,
    filtered_vars: Vec<String>,
}

impl<O: Optimizer> GradientToolkit<O> {
    /// Build with the clip bound from the environment (`NTM_GRAD_CLIP`)
    pub fn new<G>(optimizer: O, loss: &G, store: &VariableStore) -> Self
    where
        G: GradientGraph,
    {
        Self::with_config(optimizer, loss, store, ToolkitConfig::from_env())
    }

    pub fn with_config<G>(optimizer: O, loss: &G, store: &VariableStore, config: ToolkitConfig) -> Self
    where
        G: GradientGraph,
    {
        let grads_and_vars = optimizer.compute_gradients(loss, store);

        let mut filtered_grads_and_vars = Vec::with_capacity(grads_and_vars.len());
        let mut filtered_vars = Vec::with_capacity(grads_and_vars.len());
        let mut warn = false;

        for pair in grads_and_vars {
            match (pair.grad, pair.var) {
                (Some(grad), Some(var)) => {
                    filtered_grads_and_vars.push((clipped(grad, config.clip_value()), var));
                    filtered_vars.push(pair.name);
                }
                (grad, var) => {
                    warn = true;
                    tracing::warn!(
                        variable = %pair.name,
                        has_gradient = grad.is_some(),
                        has_variable = var.is_some(),
                        "gradient or variable missing, excluded from updates"
                    );
                }
            }
        }

        if warn {
            tracing::warn!(
                "All of the above variables probably are causing problems in your graph. \
                 You should probably quit now and check these out. Continuing for now."
            );
        }

        Self {
            optimizer,
            config,
            filtered_grads_and_vars,
            filtered_vars,
        }
    }

    /// Kept pairs, gradients already wrapped with clipping
    pub fn filtered_grads_and_vars(&self) -> &[(GradientFn, VariableId)] {
        &self.filtered_grads_and_vars
    }

    /// Names of the kept variables, parallel to `filtered_grads_and_vars`
    pub fn filtered_vars(&self) -> &[String] {
        &self.filtered_vars
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn optimizer(&self) -> &O {
        &self.optimizer
    }

    /// Evaluate every clipped gradient against the current values, then apply
    /// them all; returns the gradients that were applied
    pub fn step(&mut self, store: &mut VariableStore, feed: &Feed) -> Result<Vec<(ArrayD<f64>, VariableId)>> {
        let current: &VariableStore = store;
        let grads = self
            .filtered_grads_and_vars
            .iter()
            .map(|(grad, var)| Ok((grad(current, feed)?, *var)))
            .collect::<Result<Vec<_>>>()?;

        self.optimizer.apply_gradients(&grads, store)?;
        Ok(grads)
    }

    /// Run one optimizer step and report every variable with a NaN gradient
    pub fn diagnose_grads(&mut self, store: &mut VariableStore, feed: &Feed) -> Result<()> {
        let grads = self.step(store, feed)?;

        for name in nan_gradients(&grads, &self.filtered_vars) {
            tracing::warn!(variable = %name, "Looks like {} has a NaN gradient!", name);
        }
        Ok(())
    }
}

/// Names of the variables whose gradient contains a NaN
///
/// `names` is parallel to `grads`.
pub fn nan_gradients<'a>(grads: &[(ArrayD<f64>, VariableId)], names: &'a [String]) -> Vec<&'a str> {
    grads
        .iter()
        .zip(names)
        .filter(|((grad, _), _)| has_nan(grad))
        .map(|(_, name)| name.as_str())
        .collect()
}

fn clipped(grad: GradientFn, clip_value: f64) -> GradientFn {
    gradient_fn(move |store, feed| Ok(clip_grad_value(&grad(store, feed)?, clip_value)))
}
