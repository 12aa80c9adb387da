//! Environment configuration loading from .env files
//!
//! Loads configuration values from .env or environment variables.
//! Used for gradient clipping, optimizer defaults and variable initialization.

use std::env;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{NtmError, Result};

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    ensure_loaded();
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Gradient clip bound from environment
/// Default: 1.0 (gradients clipped into [-1.0, 1.0])
pub fn grad_clip() -> f64 {
    parse_var("NTM_GRAD_CLIP").unwrap_or(1.0)
}

/// Default SGD learning rate from environment
/// Default: 0.01
pub fn learning_rate() -> f64 {
    parse_var("NTM_LEARNING_RATE").unwrap_or(0.01)
}

/// Standard deviation of the random initializer
/// Default: 1.0 (standard normal)
pub fn init_stddev() -> f64 {
    parse_var("NTM_INIT_STDDEV").unwrap_or(1.0)
}

/// Optional RNG seed for variable initialization
/// Default: unset (entropy-seeded)
pub fn seed() -> Option<u64> {
    parse_var("NTM_SEED")
}

/// Cached value
pub static LEARNING_RATE: Lazy<f64> = Lazy::new(learning_rate);

/// Settings for [`GradientToolkit`](crate::gradients::GradientToolkit)
///
/// The clip bound is always finite and positive; deserialization goes
/// through [`ToolkitConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawToolkitConfig")]
pub struct ToolkitConfig {
    clip_value: f64,
}

#[derive(Deserialize)]
struct RawToolkitConfig {
    clip_value: f64,
}

impl TryFrom<RawToolkitConfig> for ToolkitConfig {
    type Error = NtmError;

    fn try_from(raw: RawToolkitConfig) -> Result<Self> {
        Self::new(raw.clip_value)
    }
}

impl ToolkitConfig {
    pub fn new(clip_value: f64) -> Result<Self> {
        if !(clip_value.is_finite() && clip_value > 0.0) {
            return Err(NtmError::ConfigError(format!(
                "clip value must be finite and positive, got {}",
                clip_value
            )));
        }
        Ok(Self { clip_value })
    }

    /// Gradients are clipped elementwise into `[-clip_value, clip_value]`
    pub fn clip_value(&self) -> f64 {
        self.clip_value
    }

    /// Load from `NTM_GRAD_CLIP`, falling back to the default on bad input
    pub fn from_env() -> Self {
        Self::new(grad_clip()).unwrap_or_default()
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self { clip_value: 1.0 }
    }
}
