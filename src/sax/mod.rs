// Symbolic Aggregate approXimation (SAX)
//
// Turns numeric time series into symbol strings: z-normalize the counts,
// average them over fixed-size feature windows, and map each average to a
// symbol through Gaussian breakpoints. The strings feed the suffix trees.

mod alphabet;
mod series;
mod statistics;

pub use alphabet::{Alphabet, MAX_ALPHABET_SIZE, MIN_ALPHABET_SIZE};
pub use series::{
    analysis_from_json, counts, reference_from_json, series_from_counts, series_from_json,
    DataPoint, TimeSeries,
};
pub use statistics::{normalize, SeriesStatistics};

use crate::error::Result;

/// SAX word of `series`, normalized with externally supplied statistics
///
/// Analysis series are normalized with the reference statistics so that all
/// words share one scale.
pub fn symbolize(
    series: &[DataPoint],
    statistics: &SeriesStatistics,
    alphabet: Alphabet,
    feature_window: usize,
) -> Result<String> {
    let normalized = normalize(&counts(series), statistics.mean, statistics.std_dev);
    alphabet.discretize(&normalized, feature_window)
}
