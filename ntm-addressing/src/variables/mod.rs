//! # Variables
//!
//! Named parameter tensors owned outside the addressing math.
//!
//! A [`VariableStore`] is passed explicitly to every component that reads or
//! updates parameters; nothing registers itself in global state.

pub mod factory;
pub mod summary;

pub use factory::{VariableFactory, VariableOptions, ZEROS_INIT};
pub use summary::{summarize_var, HistogramSummary, SummaryRecorder, DEFAULT_BUCKETS};

use std::collections::HashMap;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use crate::error::{NtmError, Result};

/// Handle to a variable inside one [`VariableStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(usize);

impl VariableId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named tensor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    name: String,
    value: ArrayD<f64>,
    trainable: bool,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ArrayD<f64> {
        &self.value
    }

    pub fn shape(&self) -> &[usize] {
        self.value.shape()
    }

    pub fn is_trainable(&self) -> bool {
        self.trainable
    }
}

/// Owner of all variables of a model
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    variables: Vec<Variable>,
    index: HashMap<String, VariableId>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new variable
    pub fn create(&mut self, name: &str, value: ArrayD<f64>, trainable: bool) -> Result<VariableId> {
        if self.index.contains_key(name) {
            return Err(NtmError::DuplicateVariable(name.to_string()));
        }

        let id = VariableId(self.variables.len());
        self.variables.push(Variable {
            name: name.to_string(),
            value,
            trainable,
        });
        self.index.insert(name.to_string(), id);

        tracing::debug!(variable = name, id = id.0, trainable, "created variable");
        Ok(id)
    }

    /// Look up a handle by name
    pub fn id(&self, name: &str) -> Option<VariableId> {
        self.index.get(name).copied()
    }

    pub fn get(&self, id: VariableId) -> Option<&Variable> {
        self.variables.get(id.0)
    }

    /// Current value of a variable by name
    pub fn value(&self, name: &str) -> Result<&ArrayD<f64>> {
        self.id(name)
            .and_then(|id| self.get(id))
            .map(Variable::value)
            .ok_or_else(|| NtmError::UnknownVariable(name.to_string()))
    }

    /// Replace a variable's value, keeping its shape
    pub fn assign(&mut self, id: VariableId, value: ArrayD<f64>) -> Result<()> {
        let var = self
            .variables
            .get_mut(id.0)
            .ok_or_else(|| NtmError::UnknownVariable(format!("#{}", id.0)))?;

        if var.value.shape() != value.shape() {
            return Err(NtmError::ShapeMismatch {
                name: var.name.clone(),
                expected: var.value.shape().to_vec(),
                actual: value.shape().to_vec(),
            });
        }

        var.value = value;
        Ok(())
    }

    /// Trainable variables in creation order
    pub fn trainable(&self) -> impl Iterator<Item = (VariableId, &Variable)> {
        self.variables
            .iter()
            .enumerate()
            .filter(|(_, v)| v.trainable)
            .map(|(i, v)| (VariableId(i), v))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn test_create_and_lookup() {
        let mut store = VariableStore::new();
        let id = store.create("w", ArrayD::zeros(IxDyn(&[2, 3])), true).unwrap();

        assert_eq!(store.id("w"), Some(id));
        assert_eq!(store.value("w").unwrap().shape(), &[2, 3]);
        assert_eq!(store.get(id).unwrap().name(), "w");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut store = VariableStore::new();
        store.create("w", ArrayD::zeros(IxDyn(&[1])), true).unwrap();
        let err = store.create("w", ArrayD::zeros(IxDyn(&[1])), true).unwrap_err();
        assert!(matches!(err, NtmError::DuplicateVariable(_)));
    }

    #[test]
    fn test_unknown_variable() {
        let store = VariableStore::new();
        assert!(matches!(store.value("nope"), Err(NtmError::UnknownVariable(_))));
    }

    #[test]
    fn test_assign_checks_shape() {
        let mut store = VariableStore::new();
        let id = store.create("b", ArrayD::zeros(IxDyn(&[3])), true).unwrap();

        store.assign(id, ArrayD::ones(IxDyn(&[3]))).unwrap();
        assert_eq!(store.value("b").unwrap().sum(), 3.0);

        let err = store.assign(id, ArrayD::ones(IxDyn(&[4]))).unwrap_err();
        assert!(matches!(err, NtmError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_trainable_filter() {
        let mut store = VariableStore::new();
        store.create("a", ArrayD::zeros(IxDyn(&[1])), true).unwrap();
        store.create("step", ArrayD::zeros(IxDyn(&[])), false).unwrap();
        store.create("c", ArrayD::zeros(IxDyn(&[1])), true).unwrap();

        let names: Vec<&str> = store.trainable().map(|(_, v)| v.name()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
