// Time-series records and their JSON form
//
// A series is a JSON array of `{ "time": <integer>, "count": <number> }`
// objects. Only the counts are discretized; times order the records.

use crate::error::{Result, TarzanError};
use serde::{Deserialize, Serialize};

/// One observation of a time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: i64,
    pub count: f64,
}

impl DataPoint {
    pub fn new(time: i64, count: f64) -> Self {
        Self { time, count }
    }
}

pub type TimeSeries = Vec<DataPoint>;

/// Build a series from counts, using the position as the time stamp
pub fn series_from_counts(counts: &[f64]) -> TimeSeries {
    counts
        .iter()
        .enumerate()
        .map(|(time, &count)| DataPoint::new(time as i64, count))
        .collect()
}

/// Counts of a series in record order
pub fn counts(series: &[DataPoint]) -> Vec<f64> {
    series.iter().map(|point| point.count).collect()
}

/// Parse a single series
///
/// # Example
/// ```
/// use tarzan::sax::series_from_json;
///
/// let series = series_from_json(r#"[{"time": 0, "count": 2}, {"time": 1, "count": 1.5}]"#).unwrap();
/// assert_eq!(series.len(), 2);
/// assert_eq!(series[1].count, 1.5);
/// ```
pub fn series_from_json(json: &str) -> Result<TimeSeries> {
    parse(json, "input")
}

/// Parse the reference series
pub fn reference_from_json(json: &str) -> Result<TimeSeries> {
    parse(json, "reference")
}

/// Parse a JSON array of analysis series
pub fn analysis_from_json(json: &str) -> Result<Vec<TimeSeries>> {
    parse(json, "analysis")
}

fn parse<T: for<'de> Deserialize<'de>>(json: &str, role: &'static str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| TarzanError::MalformedSeries { role, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_and_float_counts() {
        let series =
            series_from_json(r#"[{"time": 10, "count": 3}, {"time": 11, "count": -0.25}]"#).unwrap();
        assert_eq!(series, vec![DataPoint::new(10, 3.0), DataPoint::new(11, -0.25)]);
    }

    #[test]
    fn test_missing_count_names_the_series() {
        let err = reference_from_json(r#"[{"time": 0}]"#).unwrap_err();
        match err {
            TarzanError::MalformedSeries { role, .. } => assert_eq!(role, "reference"),
            other => panic!("Expected MalformedSeries, got {:?}", other),
        }
        assert!(err_message(r#"[{"count": 1}]"#).contains("analysis"));
    }

    fn err_message(record: &str) -> String {
        analysis_from_json(&format!("[{}]", record))
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_analysis_batch() {
        let batch = analysis_from_json(
            r#"[[{"time": 0, "count": 1}], [{"time": 0, "count": 2}, {"time": 1, "count": 3}]]"#,
        )
        .unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(counts(&batch[1]), vec![2.0, 3.0]);
    }

    #[test]
    fn test_series_from_counts_numbers_positions() {
        let series = series_from_counts(&[5.0, 6.0]);
        assert_eq!(series[0].time, 0);
        assert_eq!(series[1].time, 1);
        assert_eq!(counts(&series), vec![5.0, 6.0]);
    }
}
