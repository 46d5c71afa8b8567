use serde::{Deserialize, Serialize};
use steptrace_core::{Component, Signal, TimeGrid};

use crate::{MetricsError, ToleranceBand};

/// A settling time found by [`settling_time`], tagged by how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SettlingTime {
    /// The signal entered the band at this time and never left it again
    /// before the grid ended.
    Persistent(f64),
    /// No persistent region exists within the grid; this is merely the
    /// first time the signal entered the band.
    FirstCrossing(f64),
}

impl SettlingTime {
    /// Returns the reported time, regardless of how it was found.
    #[must_use]
    pub fn time(self) -> f64 {
        match self {
            Self::Persistent(t) | Self::FirstCrossing(t) => t,
        }
    }

    /// Returns `true` if the signal stayed in the band through the end of
    /// the grid.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Self::Persistent(_))
    }
}

/// Finds the earliest sample time from which the signal remains inside
/// `band` through the end of the grid, bounds inclusive.
///
/// A single backward scan locates the last out-of-band sample; the answer
/// is the time of the next sample, if one exists. This is equivalent to
/// scanning every in-band candidate and re-checking its whole suffix, in
/// O(n) instead of O(n²).
///
/// Returns `Ok(None)` when no sample starts a persistent in-band region
/// (including the empty-signal case). The reported time is always one of
/// the grid's own samples.
///
/// # Errors
///
/// Returns [`MetricsError::LengthMismatch`] if the signal and grid differ
/// in length.
///
/// # Examples
///
/// ```
/// use steptrace_core::{Signal, TimeGrid};
/// use steptrace_metrics::{ToleranceBand, first_persistent_time};
///
/// let grid = TimeGrid::new(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// let signal = Signal::new(vec![0.0, 1.05, 0.99, 1.01]);
/// let band = ToleranceBand::symmetric(1.0, 0.02).unwrap();
///
/// // The sample at t = 1 is out of band, so settling starts at t = 2.
/// assert_eq!(first_persistent_time(&signal, &grid, &band).unwrap(), Some(2.0));
/// ```
pub fn first_persistent_time(
    signal: &Signal,
    grid: &TimeGrid,
    band: &ToleranceBand,
) -> Result<Option<f64>, MetricsError> {
    check_lengths(signal, grid)?;

    let values = signal.values();
    let start = match values.iter().rposition(|&v| !band.contains(v)) {
        Some(last_outside) => last_outside + 1,
        None => 0,
    };

    Ok(grid.times().get(start).copied())
}

/// Finds the first sample time at which the signal lies inside `band`,
/// bounds inclusive, ignoring any later departures.
///
/// This is the documented fallback for callers when
/// [`first_persistent_time`] finds nothing. Returns `Ok(None)` if the
/// signal never enters the band.
///
/// # Errors
///
/// Returns [`MetricsError::LengthMismatch`] if the signal and grid differ
/// in length.
pub fn first_crossing_time(
    signal: &Signal,
    grid: &TimeGrid,
    band: &ToleranceBand,
) -> Result<Option<f64>, MetricsError> {
    check_lengths(signal, grid)?;

    Ok(signal
        .values()
        .iter()
        .position(|&v| band.contains(v))
        .map(|i| grid.times()[i]))
}

/// Finds the settling time with the first-crossing fallback applied.
///
/// Prefers the persistent time; when no persistent region exists, falls
/// back to the first band entry and tags the result accordingly. Returns
/// `Ok(None)` only if the signal never enters the band at all.
///
/// # Errors
///
/// Returns [`MetricsError::LengthMismatch`] if the signal and grid differ
/// in length.
pub fn settling_time(
    signal: &Signal,
    grid: &TimeGrid,
    band: &ToleranceBand,
) -> Result<Option<SettlingTime>, MetricsError> {
    if let Some(t) = first_persistent_time(signal, grid, band)? {
        return Ok(Some(SettlingTime::Persistent(t)));
    }
    Ok(first_crossing_time(signal, grid, band)?.map(SettlingTime::FirstCrossing))
}

fn check_lengths(signal: &Signal, grid: &TimeGrid) -> Result<(), MetricsError> {
    if signal.len() == grid.len() {
        Ok(())
    } else {
        Err(MetricsError::LengthMismatch {
            signal: signal.len(),
            grid: grid.len(),
        })
    }
}

/// Input for the [`SettlingDetector`] component.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlingInput {
    pub signal: Signal,
    pub grid: TimeGrid,
}

/// Settling-time detection as a composable [`Component`], configured with
/// the tolerance band to detect against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlingDetector {
    pub band: ToleranceBand,
}

impl Component for SettlingDetector {
    type Input = SettlingInput;
    type Output = Option<SettlingTime>;
    type Error = MetricsError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        settling_time(&input.signal, &input.grid, &self.band)
    }
}
