// Detector configuration
//
// Window lengths and the threshold factor are plain data so they can live in
// a TOML file next to the series they describe.

use crate::error::{Result, TarzanError};
use crate::sax::{MAX_ALPHABET_SIZE, MIN_ALPHABET_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for TARZAN anomaly detection
///
/// The threshold for a tree is `mean + threshold_stddev_factor * std_dev` of
/// its surprise values. Larger factors report fewer, stronger anomalies.
///
/// # Example
/// ```
/// use tarzan::TarzanConfig;
///
/// let config = TarzanConfig::default();
/// assert_eq!(config.alphabet_size, 5);
/// assert_eq!(config.threshold_stddev_factor, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TarzanConfig {
    /// Number of SAX symbols, 3 through 10
    pub alphabet_size: usize,

    /// Points averaged into one symbol
    pub feature_window: usize,

    /// Length of the substrings looked up during the scan
    pub scanning_window: usize,

    /// Multiple of the surprise standard deviation added to the mean
    ///
    /// Default: 0.5
    pub threshold_stddev_factor: f64,
}

impl Default for TarzanConfig {
    fn default() -> Self {
        Self {
            alphabet_size: 5,
            feature_window: 1,
            scanning_window: 2,
            threshold_stddev_factor: 0.5,
        }
    }
}

impl TarzanConfig {
    /// Only values a full standard deviation above the mean count
    pub fn strict() -> Self {
        Self {
            threshold_stddev_factor: 1.0,
            ..Self::default()
        }
    }

    /// The threshold is the mean surprise itself
    pub fn permissive() -> Self {
        Self {
            threshold_stddev_factor: 0.0,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document; missing keys take defaults
    ///
    /// # Example
    /// ```
    /// use tarzan::TarzanConfig;
    ///
    /// let config = TarzanConfig::from_toml_str("scanning_window = 3").unwrap();
    /// assert_eq!(config.scanning_window, 3);
    /// assert_eq!(config.alphabet_size, 5);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading configuration");
        Self::from_toml_str(&source)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE).contains(&self.alphabet_size) {
            return Err(TarzanError::InvalidAlphabetSize(self.alphabet_size));
        }

        if self.feature_window == 0 {
            return Err(TarzanError::ZeroFeatureWindow);
        }

        if self.scanning_window == 0 {
            return Err(TarzanError::ZeroScanningWindow);
        }

        if !self.threshold_stddev_factor.is_finite() || self.threshold_stddev_factor < 0.0 {
            return Err(TarzanError::InvalidConfig(format!(
                "threshold_stddev_factor must be finite and non-negative, got {}",
                self.threshold_stddev_factor
            )));
        }

        Ok(())
    }
}
