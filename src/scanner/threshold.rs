// Per-tree surprise threshold

use crate::sax::SeriesStatistics;
use crate::suffix_tree::SuffixTree;
use serde::Serialize;

/// Default multiple of the standard deviation added to the mean
pub const DEFAULT_STDDEV_FACTOR: f64 = 0.5;

/// Threshold derived from the surprise values of one annotated tree
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurpriseThreshold {
    pub mean: f64,
    pub std_dev: f64,
    pub factor: f64,
    pub value: f64,
}

impl SurpriseThreshold {
    /// `mean + factor * std_dev` over every node value in pre-order
    ///
    /// Unannotated nodes count as zero.
    pub fn from_tree(tree: &SuffixTree, factor: f64) -> Self {
        let values: Vec<f64> = tree.surprise_values().collect();
        let stats = SeriesStatistics::compute(&values);
        Self {
            mean: stats.mean,
            std_dev: stats.std_dev,
            factor,
            value: stats.mean + factor * stats.std_dev,
        }
    }

    /// Magnitude test: a non-zero surprise at least as far from zero as the
    /// threshold
    pub fn is_exceeded_by(&self, surprise: f64) -> bool {
        surprise != 0.0 && surprise.abs() >= self.value.abs()
    }
}
