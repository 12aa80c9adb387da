//! # ntm-addressing - Content Addressing for Memory-Augmented Networks
//!
//! Differentiable memory-addressing primitives for Neural Turing Machine /
//! Differentiable Neural Computer controllers.
//!
//! ## Features
//!
//! - **core**: gate functions (sigmoid, one_plus, softmax), cosine similarity,
//!   content lookup, argsort, SGD step and gradient clipping
//! - **variables**: explicit variable store, initializers, histogram summaries
//! - **gradients**: optimizer seam and the gradient diagnostic toolkit
//! - **config**: `.env`-aware settings
//!
//! ## Example
//!
//! ```
//! use ndarray::array;
//! use ntm_addressing::prelude::*;
//!
//! let memory = array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
//! let key = array![1.0, 0.0];
//! let weights = content_lookup(&memory, &key, 10.0);
//!
//! assert_eq!(argsort(weights.as_slice().unwrap()), vec![1, 2, 0]);
//! ```

pub mod error;
pub use error::{NtmError, Result};

pub mod config;
pub use config::ToolkitConfig;

pub mod core;
pub use crate::core::prelude::*;

pub mod variables;
pub use variables::*;

pub mod gradients;
pub use gradients::*;

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::error::{NtmError, Result};
    pub use crate::config::ToolkitConfig;
    pub use crate::core::prelude::*;
    pub use crate::variables::*;
    pub use crate::gradients::*;
}
