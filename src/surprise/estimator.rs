// Expected occurrence count of a pattern, estimated from a reference tree
//
// Three tiers, tried in order:
// 1. Direct: the pattern occurs in the reference; scale its count.
// 2. Markov: every L-gram of the pattern occurs in the reference; chain the
//    L-gram counts over the overlapping (L-1)-gram counts.
// 3. Frequency: per-symbol ratios of reference to analysis occurrences.
//
// The Markov tier can be NotComputable (no reference occurrence positions
// for the pattern length, or a zero (L-1)-gram count). That outcome falls
// through to the frequency tier instead of producing infinity or NaN.

use crate::suffix_tree::SuffixTree;

/// Expected occurrence count together with the tier that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation {
    /// Scaled occurrence count of the pattern itself in the reference
    Direct { expected: f64 },

    /// Chain-rule estimate from reference `interval`-grams (Markov order
    /// `interval - 1`)
    Markov { interval: usize, expected: f64 },

    /// Symbol frequency approximation
    Frequency { expected: f64 },
}

impl Expectation {
    pub fn value(&self) -> f64 {
        match *self {
            Expectation::Direct { expected }
            | Expectation::Markov { expected, .. }
            | Expectation::Frequency { expected } => expected,
        }
    }
}

/// Outcome of the Markov-ratio tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkovEstimate {
    Computed(f64),
    NotComputable,
}

/// Estimate how often `pattern` should occur in `analysis` given `reference`
///
/// # Example
/// ```
/// use tarzan::surprise::{estimate_expected, Expectation};
/// use tarzan::SuffixTree;
///
/// let reference = SuffixTree::new("abab");
/// let analysis = SuffixTree::new("ab");
///
/// // "ab" occurs twice in 3 reference positions, analysis has 1 position
/// let expectation = estimate_expected(&reference, &analysis, "ab");
/// assert!(matches!(expectation, Expectation::Direct { .. }));
/// assert!((expectation.value() - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn estimate_expected(reference: &SuffixTree, analysis: &SuffixTree, pattern: &str) -> Expectation {
    let pattern: Vec<char> = pattern.chars().collect();
    expected_occurrences(reference, analysis, &pattern)
}

pub(crate) fn expected_occurrences(
    reference: &SuffixTree,
    analysis: &SuffixTree,
    pattern: &[char],
) -> Expectation {
    let scale = scale_factor(analysis.len(), reference.len(), pattern.len());

    if let Some(scale) = scale.filter(|_| reference.contains(pattern)) {
        let count = reference.count(pattern).unwrap_or(0);
        return Expectation::Direct {
            expected: scale * count as f64,
        };
    }

    if let Some(interval) = largest_covered_interval(reference, pattern) {
        match markov_estimate(reference, pattern, interval, scale) {
            MarkovEstimate::Computed(expected) => {
                return Expectation::Markov { interval, expected };
            }
            MarkovEstimate::NotComputable => {
                tracing::warn!(
                    pattern_len = pattern.len(),
                    interval,
                    "Markov estimate not computable, using symbol frequencies"
                );
            }
        }
    }

    Expectation::Frequency {
        expected: frequency_estimate(reference, analysis, pattern),
    }
}

/// Ratio of possible occurrence positions in the analysis and reference texts
///
/// `None` when either text is too short to hold the pattern at all.
pub fn scale_factor(analysis_len: usize, reference_len: usize, pattern_len: usize) -> Option<f64> {
    let analysis_positions = (analysis_len + 1).checked_sub(pattern_len)?;
    let reference_positions = (reference_len + 1).checked_sub(pattern_len)?;
    if analysis_positions == 0 || reference_positions == 0 {
        return None;
    }
    Some(analysis_positions as f64 / reference_positions as f64)
}

/// Largest `L >= 2` such that every length-`L` window of `pattern` occurs in
/// the reference
///
/// Lengths are tried in increasing order up to `pattern.len() - 1`; the
/// search stops at the first length that is not fully covered.
pub(crate) fn largest_covered_interval(reference: &SuffixTree, pattern: &[char]) -> Option<usize> {
    let mut largest = None;
    for length in 2..pattern.len() {
        if pattern.windows(length).all(|window| reference.contains(window)) {
            largest = Some(length);
        } else {
            break;
        }
    }
    largest
}

/// Chain-rule estimate: product of the L-gram counts over the product of the
/// overlapping (L-1)-gram counts (all but the first and last), scaled
///
/// Evaluated as a running product of per-step ratios so long patterns do not
/// overflow before the division.
pub(crate) fn markov_estimate(
    reference: &SuffixTree,
    pattern: &[char],
    interval: usize,
    scale: Option<f64>,
) -> MarkovEstimate {
    let Some(scale) = scale else {
        return MarkovEstimate::NotComputable;
    };
    debug_assert!(interval >= 2 && interval <= pattern.len());

    let count = |window: &[char]| reference.count(window).unwrap_or(0) as f64;

    let mut grams = pattern.windows(interval);
    let Some(first) = grams.next() else {
        return MarkovEstimate::NotComputable;
    };
    let overlaps = pattern.windows(interval - 1).skip(1);

    let mut ratio = count(first);
    for (gram, overlap) in grams.zip(overlaps) {
        let denominator = count(overlap);
        if denominator == 0.0 {
            return MarkovEstimate::NotComputable;
        }
        ratio *= count(gram) / denominator;
    }

    MarkovEstimate::Computed(scale * ratio)
}

/// Symbol-frequency approximation used when no Markov estimate exists
///
/// For each symbol of the pattern, one plus its occurrences among the first
/// `pattern.len()` reference symbols, divided by its occurrences in the
/// analysis text. The sum is scaled by `|analysis| + |pattern| + 1`. Symbols
/// that never occur in the analysis text contribute nothing.
pub(crate) fn frequency_estimate(
    reference: &SuffixTree,
    analysis: &SuffixTree,
    pattern: &[char],
) -> f64 {
    let scanned = pattern.len().min(reference.len());
    let head = &reference.text()[..scanned];

    let ratio_sum: f64 = pattern
        .iter()
        .map(|&symbol| {
            let in_reference = 1 + head.iter().filter(|&&s| s == symbol).count();
            match analysis.count(&[symbol]) {
                Some(in_analysis) if in_analysis > 0 => in_reference as f64 / in_analysis as f64,
                _ => 0.0,
            }
        })
        .sum();

    (analysis.len() + pattern.len() + 1) as f64 * ratio_sum
}
