use std::convert::Infallible;

use steptrace_core::{Component, Signal, TimeGrid};

use crate::error::{ParameterError, ensure_finite};

/// Parameters of a first-order system `G(s) = K / (τs + 1)`.
///
/// The step response is `y(t) = K·(1 − e^(−t/τ))`, rising monotonically to
/// the gain `K` with time constant `τ`.
///
/// # Examples
///
/// ```
/// use steptrace_core::TimeGrid;
/// use steptrace_response::FirstOrderParameters;
///
/// let params = FirstOrderParameters::new(2.0, 0.5).unwrap();
/// assert_eq!(params.settling_time(), 2.0);
///
/// let grid = TimeGrid::linspace(0.0, 5.0, 501).unwrap();
/// let response = params.step_response(&grid);
/// assert!(response.last().unwrap() > 1.99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderParameters {
    gain: f64,
    time_constant: f64,
}

impl FirstOrderParameters {
    /// Creates validated first-order parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotFinite`] if either value is `NaN` or
    /// infinite, [`ParameterError::ZeroGain`] if `gain == 0`, or
    /// [`ParameterError::NonPositiveTimeConstant`] if `time_constant <= 0`.
    pub fn new(gain: f64, time_constant: f64) -> Result<Self, ParameterError> {
        ensure_finite("gain", gain)?;
        ensure_finite("time constant", time_constant)?;
        if gain == 0.0 {
            return Err(ParameterError::ZeroGain);
        }
        if time_constant <= 0.0 {
            return Err(ParameterError::NonPositiveTimeConstant(time_constant));
        }
        Ok(Self {
            gain,
            time_constant,
        })
    }

    /// Returns the steady-state gain K.
    #[must_use]
    pub fn gain(self) -> f64 {
        self.gain
    }

    /// Returns the time constant τ in seconds.
    #[must_use]
    pub fn time_constant(self) -> f64 {
        self.time_constant
    }

    /// Evaluates the closed-form unit-step response over `grid`.
    ///
    /// One output sample per grid entry, in grid order; an empty grid
    /// yields an empty signal.
    #[must_use]
    pub fn step_response(self, grid: &TimeGrid) -> Signal {
        let values = grid
            .times()
            .iter()
            .map(|&t| self.gain * (1.0 - (-t / self.time_constant).exp()))
            .collect();
        Signal::new(values)
    }

    /// Returns the theoretical 2% settling time `4τ`.
    #[must_use]
    pub fn settling_time(self) -> f64 {
        4.0 * self.time_constant
    }
}

/// Input for the [`FirstOrderStep`] component.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstOrderStepInput {
    pub parameters: FirstOrderParameters,
    pub grid: TimeGrid,
}

/// First-order unit-step response evaluation as a composable [`Component`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstOrderStep;

impl Component for FirstOrderStep {
    type Input = FirstOrderStepInput;
    type Output = Signal;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.parameters.step_response(&input.grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            FirstOrderParameters::new(0.0, 0.5),
            Err(ParameterError::ZeroGain)
        ));
        assert!(matches!(
            FirstOrderParameters::new(1.0, 0.0),
            Err(ParameterError::NonPositiveTimeConstant(_))
        ));
        assert!(matches!(
            FirstOrderParameters::new(1.0, -0.1),
            Err(ParameterError::NonPositiveTimeConstant(_))
        ));
        assert!(matches!(
            FirstOrderParameters::new(f64::NAN, 0.5),
            Err(ParameterError::NotFinite { .. })
        ));
    }

    #[test]
    fn response_follows_exponential_rise() {
        let p = FirstOrderParameters::new(5.0, 0.1).unwrap();
        let grid = TimeGrid::new(vec![0.0, 0.1, 0.2]).unwrap();
        let y = p.step_response(&grid);

        assert_abs_diff_eq!(y.values()[0], 0.0, epsilon = 1e-12);
        // One and two time constants in.
        assert_relative_eq!(y.values()[1], 5.0 * (1.0 - (-1.0_f64).exp()), max_relative = 1e-12);
        assert_relative_eq!(y.values()[2], 5.0 * (1.0 - (-2.0_f64).exp()), max_relative = 1e-12);
    }

    #[test]
    fn settling_time_is_four_time_constants() {
        for (gain, tau) in [(1.0, 0.5), (2.0, 2.0), (5.0, 0.1)] {
            let p = FirstOrderParameters::new(gain, tau).unwrap();
            assert_relative_eq!(p.settling_time(), 4.0 * tau, max_relative = 1e-12);
        }
    }

    #[test]
    fn step_component_delegates_to_closed_form() {
        let parameters = FirstOrderParameters::new(2.0, 2.0).unwrap();
        let grid = TimeGrid::linspace(0.0, 15.0, 31).unwrap();
        let expected = parameters.step_response(&grid);

        let output = FirstOrderStep
            .call(FirstOrderStepInput { parameters, grid })
            .unwrap();
        assert_eq!(output, expected);
    }
}
