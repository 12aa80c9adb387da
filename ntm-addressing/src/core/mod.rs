//! # Core Addressing Primitives
//!
//! - Gate functions (sigmoid, one_plus, softmax)
//! - Cosine similarity
//! - Content lookup
//! - Index sorting
//! - Optimization primitives (SGD step, clipping)

pub mod activations;
pub mod similarity;
pub mod addressing;
pub mod sort;
pub mod optim;

// Re-export everything
pub use activations::*;
pub use similarity::*;
pub use addressing::*;
pub use sort::*;
pub use optim::*;

/// Prelude module for core exports
pub mod prelude {
    pub use crate::core::activations::*;
    pub use crate::core::similarity::*;
    pub use crate::core::addressing::*;
    pub use crate::core::sort::*;
    pub use crate::core::optim::*;
}
