//! Error types for TARZAN anomaly detection
//!
//! Every validation failure is raised eagerly, before any suffix tree is
//! built, so callers never observe partially processed state.

use thiserror::Error;

/// Errors surfaced by the detector, scanner, SAX producer and configuration
#[derive(Error, Debug)]
pub enum TarzanError {
    #[error("Reference time series must contain some elements")]
    EmptyReference,

    #[error("Analysis time series must contain some elements")]
    NoAnalysisSeries,

    #[error("Analysis time series {index} must contain some elements")]
    EmptyAnalysisSeries { index: usize },

    #[error("Alphabet size must be between 3 and 10, got {0}")]
    InvalidAlphabetSize(usize),

    #[error("Feature window length must be greater than zero")]
    ZeroFeatureWindow,

    #[error("Scanning window length must be greater than zero")]
    ZeroScanningWindow,

    #[error("Scanning window length {window} exceeds shortest analysis string length {shortest}")]
    ScanningWindowTooLong { window: usize, shortest: usize },

    #[error("Symbol string for {role} must not be empty")]
    EmptySymbolString { role: &'static str },

    #[error("Malformed {role} time series: {source}")]
    MalformedSeries {
        role: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TarzanError>;
