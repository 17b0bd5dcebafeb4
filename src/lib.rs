//! Tarzan - surprise-based anomaly detection for discretized time series
//!
//! This library turns numeric time series into SAX symbol strings, indexes
//! them in online suffix trees, and flags analysis substrings whose
//! occurrence counts deviate from what a reference series predicts.
//!
//! # Example
//! ```
//! use tarzan::{AnomalyScanner, SuffixTree};
//!
//! let tree = SuffixTree::new("baedea");
//! assert!(tree.has_substring("ba"));
//! assert!(!tree.has_substring("ee"));
//!
//! let report = AnomalyScanner::new("baedea", &["aabaee", "eebeae"])
//!     .unwrap()
//!     .scan(2)
//!     .unwrap();
//! assert_eq!(report.len(), 2);
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod sax;
pub mod scanner;
pub mod suffix_tree;
pub mod surprise;

pub use config::TarzanConfig;
pub use detector::{SymbolStrings, TarzanDetector};
pub use error::{Result, TarzanError};
pub use scanner::{preprocess, AnomalyScanner, SurprisePair, SurpriseThreshold, TarzanReport};
pub use suffix_tree::{NodeId, SuffixTree};
pub use surprise::{AnnotationSummary, SurpriseAnnotator};
