// Anomaly report keyed by analysis symbol string

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// One anomalous window: its offset in the analysis string and its surprise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurprisePair {
    pub offset: usize,
    pub surprise: f64,
}

impl SurprisePair {
    pub fn new(offset: usize, surprise: f64) -> Self {
        Self { offset, surprise }
    }
}

/// Anomalies per analysis symbol string, in the order strings were first
/// reported
///
/// Identical analysis strings share one entry; their pairs are appended in
/// input order. Strings without anomalies have no entry. JSON output keeps
/// the same key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TarzanReport {
    entries: Vec<(String, Vec<SurprisePair>)>,
    index: HashMap<String, usize>,
}

impl TarzanReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, symbols: &str, pairs: Vec<SurprisePair>) {
        if pairs.is_empty() {
            return;
        }
        match self.index.get(symbols) {
            Some(&position) => self.entries[position].1.extend(pairs),
            None => {
                self.index.insert(symbols.to_string(), self.entries.len());
                self.entries.push((symbols.to_string(), pairs));
            }
        }
    }

    /// Anomalies recorded for `symbols`, if any
    pub fn get(&self, symbols: &str) -> Option<&[SurprisePair]> {
        self.index
            .get(symbols)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains(&self, symbols: &str) -> bool {
        self.index.contains_key(symbols)
    }

    /// Number of symbol strings with at least one anomaly
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of anomalous windows
    pub fn anomaly_count(&self) -> usize {
        self.entries.iter().map(|(_, pairs)| pairs.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SurprisePair])> {
        self.entries
            .iter()
            .map(|(symbols, pairs)| (symbols.as_str(), pairs.as_slice()))
    }

    pub fn into_entries(self) -> Vec<(String, Vec<SurprisePair>)> {
        self.entries
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for TarzanReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct ReportVisitor;

impl<'de> Visitor<'de> for ReportVisitor {
    type Value = TarzanReport;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from symbol string to surprise pairs")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<TarzanReport, M::Error> {
        let mut report = TarzanReport::new();
        while let Some((symbols, pairs)) = access.next_entry::<String, Vec<SurprisePair>>()? {
            report.extend(&symbols, pairs);
        }
        Ok(report)
    }
}

impl<'de> Deserialize<'de> for TarzanReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ReportVisitor)
    }
}
