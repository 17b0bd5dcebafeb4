// SAX alphabet and Gaussian breakpoints
//
// Breakpoints split the standard normal distribution into equiprobable
// regions, one per symbol. A normalized value maps to the first symbol whose
// upper breakpoint lies strictly above it; values beyond the last breakpoint
// map to the last symbol.

use crate::error::{Result, TarzanError};

pub const MIN_ALPHABET_SIZE: usize = 3;
pub const MAX_ALPHABET_SIZE: usize = 10;

const SYMBOLS: [char; MAX_ALPHABET_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// Cut points for alphabet sizes 3 through 10
const BREAKPOINTS: [&[f64]; MAX_ALPHABET_SIZE - MIN_ALPHABET_SIZE + 1] = [
    &[-0.43, 0.43],
    &[-0.67, 0.0, 0.67],
    &[-0.84, -0.25, 0.25, 0.84],
    &[-0.97, -0.43, 0.0, 0.43, 0.97],
    &[-1.07, -0.57, -0.18, 0.18, 0.57, 1.07],
    &[-1.15, -0.67, -0.32, 0.0, 0.32, 0.67, 1.15],
    &[-1.22, -0.76, -0.43, -0.14, 0.14, 0.43, 0.76, 1.22],
    &[-1.28, -0.84, -0.52, -0.25, 0.0, 0.25, 0.52, 0.84, 1.28],
];

/// Fixed-size SAX alphabet (`a`, `b`, ...) with its breakpoint table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// Alphabet of `size` symbols; sizes outside 3..=10 are rejected
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE).contains(&size) {
            return Err(TarzanError::InvalidAlphabetSize(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn symbols(&self) -> &'static [char] {
        &SYMBOLS[..self.size]
    }

    pub fn breakpoints(&self) -> &'static [f64] {
        BREAKPOINTS[self.size - MIN_ALPHABET_SIZE]
    }

    /// Symbol for a single normalized value
    pub fn symbol_for(&self, value: f64) -> char {
        let region = self
            .breakpoints()
            .iter()
            .position(|&breakpoint| value < breakpoint)
            .unwrap_or(self.size - 1);
        SYMBOLS[region]
    }

    /// Discretize a normalized series into a SAX word
    ///
    /// The series is cut into consecutive windows of `feature_window` values
    /// (the last window may be shorter); each window's mean becomes one
    /// symbol.
    ///
    /// # Example
    /// ```
    /// use tarzan::sax::Alphabet;
    ///
    /// let alphabet = Alphabet::new(3).unwrap();
    /// let word = alphabet.discretize(&[-1.0, -0.8, 0.0, 0.2, 2.0, 1.0], 2).unwrap();
    /// assert_eq!(word, "abc");
    /// ```
    pub fn discretize(&self, values: &[f64], feature_window: usize) -> Result<String> {
        if feature_window == 0 {
            return Err(TarzanError::ZeroFeatureWindow);
        }

        Ok(values
            .chunks(feature_window)
            .map(|window| {
                let mean = window.iter().sum::<f64>() / window.len() as f64;
                self.symbol_for(mean)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_size_bounds() {
        assert!(Alphabet::new(2).is_err());
        assert!(Alphabet::new(11).is_err());
        for size in MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE {
            let alphabet = Alphabet::new(size).unwrap();
            assert_eq!(alphabet.symbols().len(), size);
            assert_eq!(alphabet.breakpoints().len(), size - 1);
        }
    }

    #[test]
    fn test_breakpoints_are_increasing_and_symmetric() {
        for size in MIN_ALPHABET_SIZE..=MAX_ALPHABET_SIZE {
            let breakpoints = Alphabet::new(size).unwrap().breakpoints();
            assert!(breakpoints.windows(2).all(|pair| pair[0] < pair[1]));
            let first = breakpoints[0];
            let last = breakpoints[breakpoints.len() - 1];
            assert_eq!(first, -last);
        }
    }

    #[test]
    fn test_symbol_regions_for_size_five() {
        let alphabet = Alphabet::new(5).unwrap();
        assert_eq!(alphabet.symbol_for(-2.0), 'a');
        assert_eq!(alphabet.symbol_for(-0.84), 'b');
        assert_eq!(alphabet.symbol_for(-0.3), 'b');
        assert_eq!(alphabet.symbol_for(0.0), 'c');
        assert_eq!(alphabet.symbol_for(0.25), 'd');
        assert_eq!(alphabet.symbol_for(0.84), 'e');
        assert_eq!(alphabet.symbol_for(12.5), 'e');
    }

    #[test]
    fn test_feature_window_averages_each_chunk() {
        let alphabet = Alphabet::new(4).unwrap();
        // means: -1.0, 0.5, 2.0 (short tail window)
        let word = alphabet.discretize(&[-1.5, -0.5, 0.0, 1.0, 2.0], 2).unwrap();
        assert_eq!(word, "acd");
    }

    #[test]
    fn test_zero_feature_window_is_rejected() {
        let alphabet = Alphabet::new(5).unwrap();
        assert!(matches!(
            alphabet.discretize(&[0.0], 0),
            Err(TarzanError::ZeroFeatureWindow)
        ));
    }

    #[test]
    fn test_empty_series_discretizes_to_empty_word() {
        let alphabet = Alphabet::new(5).unwrap();
        assert_eq!(alphabet.discretize(&[], 1).unwrap(), "");
    }
}
