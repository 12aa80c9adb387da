//! # Gradients
//!
//! The seams between the addressing code and whatever builds the loss and
//! updates parameters.
//!
//! - [`GradientGraph`]: a loss that can hand out one gradient function per
//!   variable it depends on
//! - [`Optimizer`]: computes `(gradient, variable)` pairs and applies them
//! - [`GradientToolkit`]: clipping + NaN diagnostics around an optimizer

pub mod toolkit;

pub use toolkit::{nan_gradients, GradientToolkit};

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use ndarray::ArrayD;

use crate::config;
use crate::core::optim::sgd_step;
use crate::error::{NtmError, Result};
use crate::variables::{VariableId, VariableStore};

/// Gradient of the loss with respect to one variable, evaluated lazily
pub type GradientFn = Arc<dyn Fn(&VariableStore, &Feed) -> Result<ArrayD<f64>> + Send + Sync>;

/// Wrap a closure as a [`GradientFn`]
pub fn gradient_fn<F>(f: F) -> GradientFn
where
    F: Fn(&VariableStore, &Feed) -> Result<ArrayD<f64>> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Named input values for one gradient evaluation
#[derive(Debug, Clone, Default)]
pub struct Feed {
    values: HashMap<String, ArrayD<f64>>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: ArrayD<f64>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: ArrayD<f64>) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Result<&ArrayD<f64>> {
        self.values
            .get(name)
            .ok_or_else(|| NtmError::MissingFeed(name.to_string()))
    }
}

/// One `(gradient, variable)` slot; either side may be missing
#[derive(Clone)]
pub struct GradVar {
    /// Variable name as requested by the loss or found in the store
    pub name: String,
    pub grad: Option<GradientFn>,
    pub var: Option<VariableId>,
}

impl fmt::Debug for GradVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradVar")
            .field("name", &self.name)
            .field("grad", &self.grad.as_ref().map(|_| "<fn>"))
            .field("var", &self.var)
            .finish()
    }
}

/// A differentiable loss
pub trait GradientGraph {
    /// Gradient with respect to the named variable, if the loss depends on it
    fn gradient(&self, variable: &str) -> Option<GradientFn>;

    /// Every variable name the loss references
    fn variables(&self) -> Vec<String>;
}

/// Loss expressed as explicit per-variable gradient closures
#[derive(Clone, Default)]
pub struct ClosureGraph {
    gradients: BTreeMap<String, GradientFn>,
}

impl ClosureGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gradient<F>(mut self, variable: &str, f: F) -> Self
    where
        F: Fn(&VariableStore, &Feed) -> Result<ArrayD<f64>> + Send + Sync + 'static,
    {
        self.gradients.insert(variable.to_string(), gradient_fn(f));
        self
    }
}

impl GradientGraph for ClosureGraph {
    fn gradient(&self, variable: &str) -> Option<GradientFn> {
        self.gradients.get(variable).cloned()
    }

    fn variables(&self) -> Vec<String> {
        self.gradients.keys().cloned().collect()
    }
}

/// Update rule over `(gradient, variable)` pairs
pub trait Optimizer {
    /// Pairs for every trainable variable plus any variable the loss
    /// references that the store does not hold
    fn compute_gradients(&self, loss: &dyn GradientGraph, store: &VariableStore) -> Vec<GradVar> {
        let mut pairs: Vec<GradVar> = store
            .trainable()
            .map(|(id, var)| GradVar {
                name: var.name().to_string(),
                grad: loss.gradient(var.name()),
                var: Some(id),
            })
            .collect();

        for name in loss.variables() {
            if store.id(&name).is_none() {
                pairs.push(GradVar {
                    grad: loss.gradient(&name),
                    name,
                    var: None,
                });
            }
        }

        pairs
    }

    /// Apply already evaluated gradients
    fn apply_gradients(
        &mut self,
        grads_and_vars: &[(ArrayD<f64>, VariableId)],
        store: &mut VariableStore,
    ) -> Result<()>;
}

/// Plain gradient descent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Default for Sgd {
    /// Learning rate from `NTM_LEARNING_RATE`
    fn default() -> Self {
        Self::new(*config::LEARNING_RATE)
    }
}

impl Optimizer for Sgd {
    fn apply_gradients(
        &mut self,
        grads_and_vars: &[(ArrayD<f64>, VariableId)],
        store: &mut VariableStore,
    ) -> Result<()> {
        // Validate all pairs before the first assignment
        let mut updates = Vec::with_capacity(grads_and_vars.len());
        for (grad, id) in grads_and_vars {
            let var = store
                .get(*id)
                .ok_or_else(|| NtmError::UnknownVariable(format!("#{}", id.index())))?;

            if var.shape() != grad.shape() {
                return Err(NtmError::ShapeMismatch {
                    name: var.name().to_string(),
                    expected: var.shape().to_vec(),
                    actual: grad.shape().to_vec(),
                });
            }

            updates.push((*id, sgd_step(var.value(), grad, self.learning_rate)));
        }

        for (id, updated) in updates {
            store.assign(id, updated)?;
        }

        tracing::debug!(pairs = grads_and_vars.len(), lr = self.learning_rate, "applied sgd step");
        Ok(())
    }
}
