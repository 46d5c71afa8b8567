use steptrace_core::{Signal, TimeGrid};

use crate::MetricsError;

/// Returns the time and value of the signal's largest sample.
///
/// The first occurrence wins when the maximum is attained more than once.
/// Returns `Ok(None)` for an empty signal.
///
/// # Errors
///
/// Returns [`MetricsError::LengthMismatch`] if the signal and grid differ
/// in length.
pub fn peak(signal: &Signal, grid: &TimeGrid) -> Result<Option<(f64, f64)>, MetricsError> {
    if signal.len() != grid.len() {
        return Err(MetricsError::LengthMismatch {
            signal: signal.len(),
            grid: grid.len(),
        });
    }
    Ok(signal
        .peak()
        .map(|(index, value)| (grid.times()[index], value)))
}

/// Measures percent overshoot relative to a reference final value:
/// `100·(max − final) / final`.
///
/// A response that never exceeds the final value measures as zero or
/// negative. Returns `None` for an empty signal or a final value that is
/// zero or not finite.
///
/// # Examples
///
/// ```
/// use steptrace_core::Signal;
/// use steptrace_metrics::percent_overshoot;
///
/// let signal = Signal::new(vec![0.0, 1.25, 0.9, 1.0]);
/// assert_eq!(percent_overshoot(&signal, 1.0), Some(25.0));
/// ```
#[must_use]
pub fn percent_overshoot(signal: &Signal, final_value: f64) -> Option<f64> {
    if !final_value.is_finite() || final_value == 0.0 {
        return None;
    }
    signal
        .peak()
        .map(|(_, max)| 100.0 * (max - final_value) / final_value)
}
