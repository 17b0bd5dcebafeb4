//! End-to-end TARZAN detection over numeric time series
//!
//! statistics → normalization → discretization → suffix trees → annotation →
//! scan. All input validation happens before any tree is built.

use crate::config::TarzanConfig;
use crate::error::{Result, TarzanError};
use crate::sax::{self, Alphabet, DataPoint, SeriesStatistics, TimeSeries};
use crate::scanner::{AnomalyScanner, TarzanReport};

/// SAX words of the reference and analysis series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolStrings {
    pub reference: String,
    pub analysis: Vec<String>,
}

/// Detects anomalous analysis series against one reference series
///
/// # Example
/// ```
/// use tarzan::sax::series_from_counts;
/// use tarzan::TarzanDetector;
///
/// let reference = series_from_counts(&[2.0, 1.0, 6.0, 4.0, 5.0, 0.0]);
/// let analysis = vec![series_from_counts(&[-1.0, 1.0, 2.0, -1.0, 6.0, 30.0])];
///
/// let detector = TarzanDetector::new(reference, analysis, 5).unwrap();
/// let report = detector.tarzan(1, 2).unwrap();
/// assert_eq!(report.get("aabaee").unwrap()[0].offset, 0);
/// ```
#[derive(Debug, Clone)]
pub struct TarzanDetector {
    reference: TimeSeries,
    analysis: Vec<TimeSeries>,
    alphabet: Alphabet,
    config: TarzanConfig,
}

impl TarzanDetector {
    /// Validate and store the series; defaults for everything but the
    /// alphabet size
    pub fn new(
        reference: TimeSeries,
        analysis: Vec<TimeSeries>,
        alphabet_size: usize,
    ) -> Result<Self> {
        let config = TarzanConfig {
            alphabet_size,
            ..TarzanConfig::default()
        };
        Self::from_config(reference, analysis, config)
    }

    pub fn from_config(
        reference: TimeSeries,
        analysis: Vec<TimeSeries>,
        config: TarzanConfig,
    ) -> Result<Self> {
        if reference.is_empty() {
            return Err(TarzanError::EmptyReference);
        }
        if analysis.is_empty() {
            return Err(TarzanError::NoAnalysisSeries);
        }
        if let Some(index) = analysis.iter().position(Vec::is_empty) {
            return Err(TarzanError::EmptyAnalysisSeries { index });
        }
        let alphabet = Alphabet::new(config.alphabet_size)?;
        config.validate()?;

        Ok(Self {
            reference,
            analysis,
            alphabet,
            config,
        })
    }

    /// Parse the reference series and an array of analysis series from JSON
    pub fn from_json(reference: &str, analysis: &str, config: TarzanConfig) -> Result<Self> {
        let reference = sax::reference_from_json(reference)?;
        let analysis = sax::analysis_from_json(analysis)?;
        Self::from_config(reference, analysis, config)
    }

    pub fn config(&self) -> &TarzanConfig {
        &self.config
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn reference(&self) -> &[DataPoint] {
        &self.reference
    }

    pub fn analysis(&self) -> &[TimeSeries] {
        &self.analysis
    }

    /// Statistics of the reference counts, used to normalize every series
    pub fn reference_statistics(&self) -> SeriesStatistics {
        SeriesStatistics::compute(&sax::counts(&self.reference))
    }

    /// SAX words of every series
    pub fn symbol_strings(&self, feature_window: usize) -> Result<SymbolStrings> {
        if feature_window == 0 {
            return Err(TarzanError::ZeroFeatureWindow);
        }

        let statistics = self.reference_statistics();
        let symbolize =
            |series: &[DataPoint]| sax::symbolize(series, &statistics, self.alphabet, feature_window);

        let reference = symbolize(self.reference.as_slice())?;
        let analysis = self
            .analysis
            .iter()
            .map(|series| symbolize(series.as_slice()))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            mean = statistics.mean,
            std_dev = statistics.std_dev,
            reference = %reference,
            analysis = analysis.len(),
            "discretized series"
        );

        Ok(SymbolStrings {
            reference,
            analysis,
        })
    }

    /// Run the full pipeline and return the anomalies per analysis word
    pub fn tarzan(&self, feature_window: usize, scanning_window: usize) -> Result<TarzanReport> {
        if scanning_window == 0 {
            return Err(TarzanError::ZeroScanningWindow);
        }

        let words = self.symbol_strings(feature_window)?;
        if let Some(shortest) = words.analysis.iter().map(|word| word.chars().count()).min() {
            if scanning_window > shortest {
                return Err(TarzanError::ScanningWindowTooLong {
                    window: scanning_window,
                    shortest,
                });
            }
        }

        let report = AnomalyScanner::new(&words.reference, &words.analysis)?
            .with_threshold_factor(self.config.threshold_stddev_factor)
            .scan(scanning_window)?;

        tracing::debug!(
            flagged = report.len(),
            anomalies = report.anomaly_count(),
            "tarzan scan complete"
        );

        Ok(report)
    }

    /// Run with the configured window lengths
    pub fn run(&self) -> Result<TarzanReport> {
        self.tarzan(self.config.feature_window, self.config.scanning_window)
    }
}
