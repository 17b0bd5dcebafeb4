// Descriptive statistics over time-series counts and surprise values

use serde::Serialize;

/// Summary statistics of a series of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (divisor `size - 1`); zero for fewer than
    /// two values
    pub std_dev: f64,
    pub sum: f64,
    pub size: usize,
}

impl SeriesStatistics {
    /// Compute statistics over `values`
    ///
    /// An empty slice yields all-zero statistics rather than NaN.
    ///
    /// # Example
    /// ```
    /// use tarzan::sax::SeriesStatistics;
    ///
    /// let stats = SeriesStatistics::compute(&[2.0, 1.0, 6.0, 4.0, 5.0, 0.0]);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.sum, 18.0);
    /// assert!((stats.std_dev - 2.3664).abs() < 1e-4);
    /// ```
    pub fn compute(values: &[f64]) -> Self {
        let size = values.len();
        if size == 0 {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                std_dev: 0.0,
                sum: 0.0,
                size,
            };
        }

        let sum: f64 = values.iter().sum();
        let mean = sum / size as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let std_dev = if size > 1 {
            let squared: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
            (squared / (size - 1) as f64).sqrt()
        } else {
            0.0
        };

        Self {
            min,
            max,
            mean,
            std_dev,
            sum,
            size,
        }
    }
}

/// Z-normalize `values` with a given mean and standard deviation
///
/// A standard deviation of exactly zero is replaced by one, so constant
/// series normalize to zeros instead of dividing by zero.
pub fn normalize(values: &[f64], mean: f64, std_dev: f64) -> Vec<f64> {
    let std_dev = if std_dev == 0.0 { 1.0 } else { std_dev };
    values.iter().map(|value| (value - mean) / std_dev).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_fixture_statistics() {
        let stats = SeriesStatistics::compute(&[2.0, 1.0, 6.0, 4.0, 5.0, 0.0]);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 6.0);
        assert_eq!(stats.size, 6);
        assert_eq!(stats.sum, 18.0);
        assert!((stats.std_dev - (28.0f64 / 5.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_extrema_of_all_negative_series() {
        let stats = SeriesStatistics::compute(&[-3.0, -1.0, -7.0]);
        assert_eq!(stats.min, -7.0);
        assert_eq!(stats.max, -1.0);
    }

    #[test]
    fn test_single_value_has_zero_std_dev() {
        let stats = SeriesStatistics::compute(&[42.0]);
        assert_eq!(stats.mean, 42.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_empty_series_is_all_zero() {
        let stats = SeriesStatistics::compute(&[]);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_normalize_with_reference_statistics() {
        let stats = SeriesStatistics::compute(&[2.0, 1.0, 6.0, 4.0, 5.0, 0.0]);
        let normalized = normalize(&[-1.0, 1.0, 30.0], stats.mean, stats.std_dev);

        assert!((normalized[0] - (-4.0 / stats.std_dev)).abs() < 1e-12);
        assert!((normalized[1] - (-2.0 / stats.std_dev)).abs() < 1e-12);
        assert!((normalized[2] - 27.0 / stats.std_dev).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_guards_zero_std_dev() {
        let normalized = normalize(&[0.0, 0.0, 5.0], 0.0, 0.0);
        assert_eq!(normalized, vec![0.0, 0.0, 5.0]);
    }
}
