// Sliding-window anomaly scan over annotated analysis trees
//
// The reference tree is built once and shared read-only. Each analysis
// string gets its own tree, annotated against the reference. A window of the
// analysis string is anomalous when the surprise of the node it ends in is at
// least as large in magnitude as the tree's threshold.

mod report;
mod threshold;

pub use report::{SurprisePair, TarzanReport};
pub use threshold::{SurpriseThreshold, DEFAULT_STDDEV_FACTOR};

use crate::error::{Result, TarzanError};
use crate::suffix_tree::SuffixTree;
use crate::surprise::SurpriseAnnotator;

/// Build the reference tree and one annotated tree per analysis string
///
/// Output order matches input order. With the `parallel` feature the
/// analysis trees are built and annotated on the rayon pool.
pub fn preprocess<S>(reference: &str, analysis: &[S]) -> Vec<SuffixTree>
where
    S: AsRef<str> + Sync,
{
    let reference = SuffixTree::new(reference);
    let annotator = SurpriseAnnotator::new(&reference);
    annotate_all(&annotator, analysis)
}

fn annotated_tree(annotator: &SurpriseAnnotator<'_>, symbols: &str) -> SuffixTree {
    let mut tree = SuffixTree::new(symbols);
    annotator.annotate(&mut tree);
    tree
}

#[cfg(feature = "parallel")]
fn annotate_all<S>(annotator: &SurpriseAnnotator<'_>, analysis: &[S]) -> Vec<SuffixTree>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    analysis
        .par_iter()
        .map(|symbols| annotated_tree(annotator, symbols.as_ref()))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn annotate_all<S>(annotator: &SurpriseAnnotator<'_>, analysis: &[S]) -> Vec<SuffixTree>
where
    S: AsRef<str> + Sync,
{
    analysis
        .iter()
        .map(|symbols| annotated_tree(annotator, symbols.as_ref()))
        .collect()
}

/// Anomaly scanner over a set of annotated analysis trees
///
/// # Example
/// ```
/// use tarzan::AnomalyScanner;
///
/// let scanner = AnomalyScanner::new("baedea", &["aabaee"]).unwrap();
/// let report = scanner.scan(2).unwrap();
///
/// let pairs = report.get("aabaee").unwrap();
/// assert_eq!(pairs[0].offset, 0);
/// assert_eq!(pairs[0].surprise, -103.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnomalyScanner {
    trees: Vec<SuffixTree>,
    threshold_factor: f64,
}

impl AnomalyScanner {
    /// Validate the symbol strings, then build and annotate all trees
    pub fn new<S>(reference: &str, analysis: &[S]) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        if reference.is_empty() {
            return Err(TarzanError::EmptySymbolString { role: "reference" });
        }
        if analysis.is_empty() {
            return Err(TarzanError::NoAnalysisSeries);
        }
        if analysis.iter().any(|symbols| symbols.as_ref().is_empty()) {
            return Err(TarzanError::EmptySymbolString { role: "analysis" });
        }

        Ok(Self::from_trees(preprocess(reference, analysis)))
    }

    /// Scanner over trees that were already annotated
    pub fn from_trees(trees: Vec<SuffixTree>) -> Self {
        Self {
            trees,
            threshold_factor: DEFAULT_STDDEV_FACTOR,
        }
    }

    pub fn with_threshold_factor(mut self, factor: f64) -> Self {
        self.threshold_factor = factor;
        self
    }

    pub fn trees(&self) -> &[SuffixTree] {
        &self.trees
    }

    pub fn threshold_factor(&self) -> f64 {
        self.threshold_factor
    }

    /// Threshold of every tree, in tree order
    pub fn thresholds(&self) -> Vec<SurpriseThreshold> {
        self.trees
            .iter()
            .map(|tree| SurpriseThreshold::from_tree(tree, self.threshold_factor))
            .collect()
    }

    /// Scan every analysis string with windows of `scanning_window` symbols
    pub fn scan(&self, scanning_window: usize) -> Result<TarzanReport> {
        self.scan_with(scanning_window, self.threshold_factor)
    }

    /// Scan with an explicit threshold factor
    ///
    /// The factor must be finite and non-negative.
    pub fn scan_with(&self, scanning_window: usize, factor: f64) -> Result<TarzanReport> {
        validate_factor(factor)?;
        self.validate_window(scanning_window)?;

        let mut report = TarzanReport::new();
        for tree in &self.trees {
            let threshold = SurpriseThreshold::from_tree(tree, factor);
            let pairs = scan_tree(tree, &threshold, scanning_window);

            tracing::debug!(
                symbols = %tree.text_string(),
                threshold = threshold.value,
                anomalies = pairs.len(),
                "scanned analysis tree"
            );

            report.extend(&tree.text_string(), pairs);
        }

        Ok(report)
    }

    fn validate_window(&self, scanning_window: usize) -> Result<()> {
        if scanning_window == 0 {
            return Err(TarzanError::ZeroScanningWindow);
        }
        if let Some(shortest) = self.trees.iter().map(SuffixTree::len).min() {
            if scanning_window > shortest {
                return Err(TarzanError::ScanningWindowTooLong {
                    window: scanning_window,
                    shortest,
                });
            }
        }
        Ok(())
    }
}

fn validate_factor(factor: f64) -> Result<()> {
    if !factor.is_finite() || factor < 0.0 {
        return Err(TarzanError::InvalidConfig(format!(
            "threshold factor must be finite and non-negative, got {}",
            factor
        )));
    }
    Ok(())
}

fn scan_tree(
    tree: &SuffixTree,
    threshold: &SurpriseThreshold,
    scanning_window: usize,
) -> Vec<SurprisePair> {
    tree.text()
        .windows(scanning_window)
        .enumerate()
        .filter_map(|(offset, window)| {
            let surprise = tree.surprise_of(window).unwrap_or(0.0);
            threshold
                .is_exceeded_by(surprise)
                .then(|| SurprisePair::new(offset, surprise))
        })
        .collect()
}

#[cfg(test)]
mod tests;
