use thiserror::Error;

/// An ordered sequence of sample times.
///
/// A `TimeGrid` wraps a `Vec<f64>` and guarantees every sample is finite
/// and that samples are strictly increasing. Empty and single-sample grids
/// are valid; operations consuming a grid define their own behavior for
/// short inputs (an empty grid always yields an empty output).
///
/// Reported times from downstream analyses are always grid samples, never
/// interpolated values, so their resolution is bounded by the grid's
/// sampling interval. Callers needing tighter precision must supply a
/// finer grid.
///
/// # Examples
///
/// ```
/// use steptrace_core::TimeGrid;
///
/// let grid = TimeGrid::linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// assert!(TimeGrid::new(vec![0.0, 2.0, 1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Creates a `TimeGrid` from a vector of sample times.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NotFinite`] if any sample is `NaN` or infinite.
    /// Returns [`GridError::NotIncreasing`] if any sample is not strictly
    /// greater than its predecessor.
    pub fn new(times: Vec<f64>) -> Result<Self, GridError> {
        if let Some(&value) = times.iter().find(|t| !t.is_finite()) {
            return Err(GridError::NotFinite { value });
        }
        if let Some(pair) = times.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(GridError::NotIncreasing {
                previous: pair[0],
                next: pair[1],
            });
        }
        Ok(Self { times })
    }

    /// Creates a grid of `count` evenly spaced samples over `[start, end]`,
    /// inclusive of both endpoints.
    ///
    /// A `count` of zero yields an empty grid; a `count` of one yields only
    /// `start`.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if an endpoint is not finite or if
    /// `end <= start` with two or more samples requested.
    pub fn linspace(start: f64, end: f64, count: usize) -> Result<Self, GridError> {
        match count {
            0 => Self::new(Vec::new()),
            1 => Self::new(vec![start]),
            _ => {
                let step = (end - start) / (count - 1) as f64;
                let mut times: Vec<f64> = (0..count)
                    .map(|i| start + step * i as f64)
                    .collect();
                // Land exactly on the requested endpoint.
                times[count - 1] = end;
                Self::new(times)
            }
        }
    }

    /// Returns the sample times as a slice.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the grid holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the last sample time, if any.
    #[must_use]
    pub fn end(&self) -> Option<f64> {
        self.times.last().copied()
    }
}

/// Errors that can occur when constructing a [`TimeGrid`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GridError {
    /// A sample time was `NaN` or infinite.
    #[error("sample time is not finite: {value}")]
    NotFinite { value: f64 },

    /// A sample time did not strictly increase.
    #[error("sample times must be strictly increasing: {next} follows {previous}")]
    NotIncreasing { previous: f64, next: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn valid_grids() {
        assert!(TimeGrid::new(Vec::new()).unwrap().is_empty());
        assert_eq!(TimeGrid::new(vec![0.5]).unwrap().len(), 1);

        let grid = TimeGrid::new(vec![0.0, 0.1, 0.5, 2.0]).unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.end(), Some(2.0));
    }

    #[test]
    fn rejects_non_finite_samples() {
        assert!(matches!(
            TimeGrid::new(vec![0.0, f64::NAN]),
            Err(GridError::NotFinite { .. })
        ));
        assert!(matches!(
            TimeGrid::new(vec![0.0, f64::INFINITY]),
            Err(GridError::NotFinite { .. })
        ));
    }

    #[test]
    fn rejects_non_increasing_samples() {
        assert!(matches!(
            TimeGrid::new(vec![0.0, 1.0, 1.0]),
            Err(GridError::NotIncreasing { .. })
        ));
        assert!(matches!(
            TimeGrid::new(vec![1.0, 0.0]),
            Err(GridError::NotIncreasing {
                previous: 1.0,
                next: 0.0
            })
        ));
    }

    #[test]
    fn linspace_spacing_and_endpoints() {
        let grid = TimeGrid::linspace(0.0, 10.0, 11).unwrap();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid.times()[0], 0.0);
        assert_eq!(grid.end(), Some(10.0));
        for (i, &t) in grid.times().iter().enumerate() {
            assert_relative_eq!(t, i as f64, max_relative = 1e-12);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(TimeGrid::linspace(0.0, 1.0, 0).unwrap().is_empty());
        assert_eq!(TimeGrid::linspace(3.0, 9.0, 1).unwrap().times(), &[3.0]);
    }

    #[test]
    fn linspace_rejects_reversed_range() {
        assert!(TimeGrid::linspace(1.0, 0.0, 10).is_err());
        assert!(TimeGrid::linspace(0.0, 0.0, 2).is_err());
    }
}
