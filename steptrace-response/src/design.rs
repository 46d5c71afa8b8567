//! Inverse design: solving for second-order parameters from transient
//! specifications (percent overshoot and 2% settling time).

use crate::{ParameterError, SecondOrderParameters, error::ensure_finite};

/// Solves for the damping ratio producing a target percent overshoot:
/// `ζ = −ln m / √(π² + ln² m)` with `m = Mp/100`.
///
/// # Errors
///
/// Returns [`ParameterError::OvershootOutOfRange`] unless
/// `overshoot_percent` lies strictly between 0 and 100.
///
/// # Examples
///
/// ```
/// use steptrace_response::damping_from_overshoot;
///
/// let zeta = damping_from_overshoot(10.0).unwrap();
/// assert!((zeta - 0.5912).abs() < 1e-4);
/// ```
pub fn damping_from_overshoot(overshoot_percent: f64) -> Result<f64, ParameterError> {
    ensure_finite("percent overshoot", overshoot_percent)?;
    if overshoot_percent <= 0.0 || overshoot_percent >= 100.0 {
        return Err(ParameterError::OvershootOutOfRange(overshoot_percent));
    }
    let ln_m = (overshoot_percent / 100.0).ln();
    Ok(-ln_m / (std::f64::consts::PI.powi(2) + ln_m * ln_m).sqrt())
}

/// Solves for the natural frequency meeting a 2% settling-time target at a
/// given damping ratio: `ωₙ = 4 / (ζ·t_s)`.
///
/// # Errors
///
/// Returns [`ParameterError::NonPositiveDamping`] if `damping_ratio <= 0`
/// (an undamped system never settles) or
/// [`ParameterError::NonPositiveSettlingTime`] if `settling_time <= 0`.
pub fn frequency_from_settling(
    damping_ratio: f64,
    settling_time: f64,
) -> Result<f64, ParameterError> {
    ensure_finite("damping ratio", damping_ratio)?;
    ensure_finite("settling time", settling_time)?;
    if damping_ratio <= 0.0 {
        return Err(ParameterError::NonPositiveDamping(damping_ratio));
    }
    if settling_time <= 0.0 {
        return Err(ParameterError::NonPositiveSettlingTime(settling_time));
    }
    Ok(4.0 / (damping_ratio * settling_time))
}

/// Builds the second-order parameters meeting both transient
/// specifications at once.
///
/// # Errors
///
/// Returns a [`ParameterError`] if either specification is out of range.
pub fn from_transient_specs(
    overshoot_percent: f64,
    settling_time: f64,
) -> Result<SecondOrderParameters, ParameterError> {
    let damping_ratio = damping_from_overshoot(overshoot_percent)?;
    let natural_frequency = frequency_from_settling(damping_ratio, settling_time)?;
    SecondOrderParameters::new(natural_frequency, damping_ratio)
}
