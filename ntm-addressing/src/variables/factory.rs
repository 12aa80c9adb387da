//! Variable factory with the standard initializers

use ndarray::{ArrayD, IxDyn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use super::{VariableId, VariableStore};
use crate::config;
use crate::error::Result;

/// Fill value of [`VariableFactory::zeros`], a small constant rather than 0.0
pub const ZEROS_INIT: f64 = 1e-6;

/// Extra options for created variables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableOptions {
    pub trainable: bool,
}

impl Default for VariableOptions {
    fn default() -> Self {
        Self { trainable: true }
    }
}

/// Creates named variables in a [`VariableStore`]
pub struct VariableFactory {
    rng: StdRng,
    stddev: f64,
}

impl VariableFactory {
    /// Seeded from `NTM_SEED` when set, from entropy otherwise
    pub fn new() -> Self {
        let rng = match config::seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            stddev: config::init_stddev(),
        }
    }

    /// Deterministic factory
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            stddev: 1.0,
        }
    }

    /// Standard deviation used by [`random`](Self::random)
    pub fn with_stddev(mut self, stddev: f64) -> Self {
        self.stddev = stddev;
        self
    }

    /// Near-zero constant initializer ([`ZEROS_INIT`])
    pub fn zeros(
        &mut self,
        store: &mut VariableStore,
        name: &str,
        shape: &[usize],
        options: VariableOptions,
    ) -> Result<VariableId> {
        let value = ArrayD::from_elem(IxDyn(shape), ZEROS_INIT);
        store.create(name, value, options.trainable)
    }

    /// Ones initializer
    pub fn ones(
        &mut self,
        store: &mut VariableStore,
        name: &str,
        shape: &[usize],
        options: VariableOptions,
    ) -> Result<VariableId> {
        store.create(name, ArrayD::ones(IxDyn(shape)), options.trainable)
    }

    /// Normal(0, stddev) initializer
    pub fn random(
        &mut self,
        store: &mut VariableStore,
        name: &str,
        shape: &[usize],
        options: VariableOptions,
    ) -> Result<VariableId> {
        let normal = Normal::new(0.0, self.stddev)?;
        let value = ArrayD::from_shape_simple_fn(IxDyn(shape), || normal.sample(&mut self.rng));
        store.create(name, value, options.trainable)
    }
}

impl Default for VariableFactory {
    fn default() -> Self {
        Self::new()
    }
}
