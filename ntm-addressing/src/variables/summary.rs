//! Histogram summaries of variable distributions

use ndarray::{ArrayBase, ArrayD, Data, Dimension};
use serde::{Deserialize, Serialize};

use super::VariableStore;
use crate::error::{NtmError, Result};

/// Bucket count used by [`summarize_var`]
pub const DEFAULT_BUCKETS: usize = 10;

/// Distribution snapshot of one tensor
///
/// Statistics and buckets cover finite values only; the rest are counted in
/// `non_finite`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub name: String,
    pub count: usize,
    pub non_finite: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
    /// Bucket boundaries, `counts.len() + 1` entries
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl HistogramSummary {
    pub fn from_values<S, D>(name: &str, values: &ArrayBase<S, D>, buckets: usize) -> Self
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let non_finite = values.len() - finite.len();

        if finite.is_empty() || buckets == 0 {
            return Self {
                name: name.to_string(),
                count: finite.len(),
                non_finite,
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                std: 0.0,
                edges: Vec::new(),
                counts: Vec::new(),
            };
        }

        let n = finite.len() as f64;
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;

        let (mean, std) = if range == 0.0 {
            (min, 0.0)
        } else {
            let mean = finite.iter().sum::<f64>() / n;
            let variance = finite.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
            (mean, variance.sqrt())
        };

        let (edges, counts) = if range == 0.0 {
            (vec![min, max], vec![finite.len()])
        } else {
            let width = range / buckets as f64;
            let edges = (0..=buckets).map(|i| min + width * i as f64).collect();
            let mut counts = vec![0; buckets];
            for v in &finite {
                let idx = (((v - min) / width) as usize).min(buckets - 1);
                counts[idx] += 1;
            }
            (edges, counts)
        };

        Self {
            name: name.to_string(),
            count: finite.len(),
            non_finite,
            min,
            max,
            mean,
            std,
            edges,
            counts,
        }
    }
}

/// Collects summaries for later inspection or export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRecorder {
    histograms: Vec<HistogramSummary>,
}

impl SummaryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, summary: HistogramSummary) {
        tracing::debug!(
            name = %summary.name,
            count = summary.count,
            min = summary.min,
            max = summary.max,
            mean = summary.mean,
            std = summary.std,
            "histogram summary"
        );
        self.histograms.push(summary);
    }

    pub fn histograms(&self) -> &[HistogramSummary] {
        &self.histograms
    }

    /// Most recent summary recorded under `name`
    pub fn latest(&self, name: &str) -> Option<&HistogramSummary> {
        self.histograms.iter().rev().find(|h| h.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Create a trainable variable initialized to `value` and record its
/// distribution; returns the initialized value
pub fn summarize_var(
    store: &mut VariableStore,
    recorder: &mut SummaryRecorder,
    name: &str,
    value: ArrayD<f64>,
) -> Result<ArrayD<f64>> {
    let id = store.create(name, value, true)?;
    let var = store
        .get(id)
        .ok_or_else(|| NtmError::UnknownVariable(name.to_string()))?;

    recorder.record(HistogramSummary::from_values(name, var.value(), DEFAULT_BUCKETS));
    Ok(var.value().clone())
}
