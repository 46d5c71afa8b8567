use thiserror::Error;

/// A closed tolerance band `[low, high]` around a reference final value.
///
/// Both bounds are inclusive: a sample sitting exactly on either bound
/// counts as inside the band.
///
/// # Examples
///
/// ```
/// use steptrace_metrics::ToleranceBand;
///
/// // The classic 2% band around a unit final value.
/// let band = ToleranceBand::symmetric(1.0, 0.02).unwrap();
/// assert!(band.contains(0.98));
/// assert!(band.contains(1.02));
/// assert!(!band.contains(1.021));
///
/// // The asymmetric "visual" band some analyses prefer.
/// let band = ToleranceBand::from_percent_limits(1.0, 98.2, 102.0).unwrap();
/// assert!(band.contains(0.982));
/// assert!(!band.contains(0.9819));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand {
    low: f64,
    high: f64,
}

impl ToleranceBand {
    /// Creates a band from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BandError::NotFinite`] if a bound is `NaN` or infinite,
    /// or [`BandError::EmptyBand`] if `low >= high`.
    pub fn new(low: f64, high: f64) -> Result<Self, BandError> {
        for value in [low, high] {
            if !value.is_finite() {
                return Err(BandError::NotFinite { value });
            }
        }
        if low >= high {
            return Err(BandError::EmptyBand { low, high });
        }
        Ok(Self { low, high })
    }

    /// Creates a symmetric band `final_value·(1 ± tolerance)`.
    ///
    /// # Errors
    ///
    /// Returns a [`BandError`] if the derived bounds are not finite or do
    /// not satisfy `low < high` (for example, a zero tolerance or a
    /// non-positive final value).
    pub fn symmetric(final_value: f64, tolerance: f64) -> Result<Self, BandError> {
        Self::new(
            final_value * (1.0 - tolerance),
            final_value * (1.0 + tolerance),
        )
    }

    /// Creates a band from percent limits of the final value, e.g.
    /// `(98.2, 102.0)` for a band from 98.2% to 102% of the final value.
    ///
    /// # Errors
    ///
    /// Returns a [`BandError`] if the derived bounds are invalid.
    pub fn from_percent_limits(
        final_value: f64,
        low_percent: f64,
        high_percent: f64,
    ) -> Result<Self, BandError> {
        Self::new(
            final_value * low_percent / 100.0,
            final_value * high_percent / 100.0,
        )
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    /// Returns `true` if `value` lies inside the band, bounds included.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Errors that can occur when constructing a [`ToleranceBand`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BandError {
    /// A bound was `NaN` or infinite.
    #[error("band bound is not finite: {value}")]
    NotFinite { value: f64 },

    /// The bounds do not enclose any values.
    #[error("band is empty: low {low} must be below high {high}")]
    EmptyBand { low: f64, high: f64 },
}
