/// A sampled output signal, one value per [`TimeGrid`] entry.
///
/// A `Signal` is produced by a response evaluator against a specific grid
/// and preserves that grid's order and cardinality. It carries no time
/// information of its own; pair it with the grid it was evaluated on.
///
/// [`TimeGrid`]: crate::TimeGrid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signal {
    values: Vec<f64>,
}

impl Signal {
    /// Creates a signal from sampled values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the sampled values as a slice.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the signal holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the last sample, if any.
    ///
    /// For a response evaluated over a long enough window this is the
    /// practical steady-state value.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the index and value of the largest sample, if any.
    ///
    /// The first index is returned when the maximum is attained more than
    /// once. `NaN` samples are skipped entirely; a signal holding nothing
    /// but `NaN` reports no peak.
    #[must_use]
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, value)| !value.is_nan())
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
    }
}

impl From<Vec<f64>> for Signal {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<Signal> for Vec<f64> {
    fn from(signal: Signal) -> Self {
        signal.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_and_peak() {
        let signal = Signal::new(vec![0.0, 1.2, 0.9, 1.0]);
        assert_eq!(signal.last(), Some(1.0));
        assert_eq!(signal.peak(), Some((1, 1.2)));
    }

    #[test]
    fn peak_prefers_first_of_equal_maxima() {
        let signal = Signal::new(vec![0.5, 1.0, 1.0, 0.5]);
        assert_eq!(signal.peak(), Some((1, 1.0)));
    }

    #[test]
    fn peak_skips_nan_samples() {
        // A NaN in front must not shadow the real maximum.
        let signal = Signal::new(vec![f64::NAN, 0.5, 1.1, 0.9]);
        assert_eq!(signal.peak(), Some((2, 1.1)));

        let all_nan = Signal::new(vec![f64::NAN, f64::NAN]);
        assert_eq!(all_nan.peak(), None);
    }

    #[test]
    fn empty_signal() {
        let signal = Signal::default();
        assert!(signal.is_empty());
        assert_eq!(signal.last(), None);
        assert_eq!(signal.peak(), None);
    }
}
