use thiserror::Error;

/// Errors that can occur when constructing system parameters or solving
/// for them from transient specifications.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParameterError {
    /// A parameter was `NaN` or infinite.
    #[error("{name} is not finite: {value}")]
    NotFinite { name: &'static str, value: f64 },

    /// The natural frequency must be strictly positive.
    #[error("natural frequency must be positive: {0} rad/s")]
    NonPositiveFrequency(f64),

    /// The damping ratio must be non-negative.
    #[error("damping ratio must be non-negative: {0}")]
    NegativeDamping(f64),

    /// An undamped system has no finite settling time to design against.
    #[error("damping ratio must be positive for settling-time design: {0}")]
    NonPositiveDamping(f64),

    /// The time constant must be strictly positive.
    #[error("time constant must be positive: {0} s")]
    NonPositiveTimeConstant(f64),

    /// A first-order system with zero gain has no response to analyze.
    #[error("gain must be nonzero")]
    ZeroGain,

    /// A percent overshoot target must lie strictly between 0 and 100.
    #[error("percent overshoot must be in (0, 100): {0}")]
    OvershootOutOfRange(f64),

    /// A settling-time target must be strictly positive.
    #[error("settling time must be positive: {0} s")]
    NonPositiveSettlingTime(f64),
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NotFinite { name, value })
    }
}
