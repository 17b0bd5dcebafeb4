// Surprise annotation of analysis suffix trees
//
// Every non-root node of an analysis tree represents the string spelled on
// the path from the root down to the end of its edge. Its surprise value is
// how often that string occurs in the analysis text minus how often the
// reference text says it should occur (see `estimator`). Large magnitudes in
// either direction flag anomalous subsequences.

mod estimator;

pub use estimator::{estimate_expected, scale_factor, Expectation, MarkovEstimate};

use crate::suffix_tree::{NodeId, SuffixTree};
use estimator::expected_occurrences;

/// How many nodes each estimator tier annotated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub direct: usize,
    pub markov: usize,
    pub frequency: usize,
}

impl AnnotationSummary {
    fn record(&mut self, expectation: &Expectation) {
        match expectation {
            Expectation::Direct { .. } => self.direct += 1,
            Expectation::Markov { .. } => self.markov += 1,
            Expectation::Frequency { .. } => self.frequency += 1,
        }
    }

    /// Total number of annotated nodes
    pub fn total(&self) -> usize {
        self.direct + self.markov + self.frequency
    }
}

/// Annotates analysis trees against one shared, read-only reference tree
pub struct SurpriseAnnotator<'r> {
    reference: &'r SuffixTree,
}

impl<'r> SurpriseAnnotator<'r> {
    pub fn new(reference: &'r SuffixTree) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &'r SuffixTree {
        self.reference
    }

    /// Set the surprise value of every non-root node of `analysis`
    ///
    /// Values are computed from an immutable pre-order walk and written once
    /// the walk is complete, so each node is written exactly once.
    pub fn annotate(&self, analysis: &mut SuffixTree) -> AnnotationSummary {
        let mut summary = AnnotationSummary::default();
        let annotations = self.surprises(analysis, &mut summary);

        for (id, surprise) in annotations {
            analysis.set_surprise(id, surprise);
        }

        tracing::debug!(
            symbols = analysis.len(),
            direct = summary.direct,
            markov = summary.markov,
            frequency = summary.frequency,
            "annotated analysis tree"
        );

        summary
    }

    fn surprises(
        &self,
        analysis: &SuffixTree,
        summary: &mut AnnotationSummary,
    ) -> Vec<(NodeId, f64)> {
        let mut annotations = Vec::with_capacity(analysis.node_count().saturating_sub(1));

        // (node, string represented by its parent) frames
        let mut stack: Vec<(NodeId, Vec<char>)> = analysis
            .node(analysis.root())
            .children()
            .rev()
            .map(|(_, child)| (child, Vec::new()))
            .collect();

        while let Some((id, mut represented)) = stack.pop() {
            represented.extend_from_slice(analysis.edge_label(id));

            let expectation = expected_occurrences(self.reference, analysis, &represented);
            let observed = analysis.count(&represented).unwrap_or(0) as f64;
            let surprise = observed - expectation.value();

            tracing::trace!(
                node = id.index(),
                pattern_len = represented.len(),
                observed,
                ?expectation,
                surprise,
                "node surprise"
            );

            summary.record(&expectation);
            annotations.push((id, surprise));

            for (_, child) in analysis.node(id).children().rev() {
                stack.push((child, represented.clone()));
            }
        }

        annotations
    }
}

/// Annotate `analysis` against `reference`
///
/// # Example
/// ```
/// use tarzan::{surprise, SuffixTree};
///
/// let reference = SuffixTree::new("baedea");
/// let mut analysis = SuffixTree::new("baedea");
/// surprise::annotate(&reference, &mut analysis);
///
/// // A series compared with itself holds no surprises
/// assert!(analysis.surprise_values().all(|value| value == 0.0));
/// ```
pub fn annotate(reference: &SuffixTree, analysis: &mut SuffixTree) -> AnnotationSummary {
    SurpriseAnnotator::new(reference).annotate(analysis)
}
