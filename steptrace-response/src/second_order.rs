use std::convert::Infallible;

use steptrace_core::{Component, GridError, Signal, TimeGrid};

use crate::error::{ParameterError, ensure_finite};

/// Tolerance on `|ζ − 1|` when deciding whether a system is critically
/// damped. Keeps the regime boundary in one place instead of repeating the
/// comparison at every call site.
const CRITICAL_TOLERANCE: f64 = 1e-8;

/// Parameters of a normalized second-order system.
///
/// Describes `G(s) = ωₙ² / (s² + 2ζωₙs + ωₙ²)` by its natural frequency
/// `ωₙ` (rad/s, strictly positive) and damping ratio `ζ` (non-negative).
/// Both are validated at construction, so every held instance can evaluate
/// its step response without further checks.
///
/// # Examples
///
/// ```
/// use steptrace_core::TimeGrid;
/// use steptrace_response::SecondOrderParameters;
///
/// let params = SecondOrderParameters::new(5.0, 0.4).unwrap();
/// let grid = TimeGrid::linspace(0.0, 2.0, 101).unwrap();
/// let response = params.step_response(&grid);
///
/// assert_eq!(response.len(), grid.len());
/// assert!(response.values()[0].abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondOrderParameters {
    natural_frequency: f64,
    damping_ratio: f64,
}

/// The damping regime of a second-order system, with the quantities each
/// closed form needs resolved once at classification time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// `ζ < 1`: the response oscillates at the damped frequency
    /// `ω_d = ωₙ√(1 − ζ²)` with phase `φ = arccos ζ`.
    Underdamped { damped_frequency: f64, phase: f64 },
    /// `ζ = 1` (within tolerance): fastest response without oscillation.
    CriticallyDamped,
    /// `ζ > 1`: two distinct real poles `s₁`, `s₂` with partial-fraction
    /// coefficients `a`, `b`.
    Overdamped { s1: f64, s2: f64, a: f64, b: f64 },
}

impl SecondOrderParameters {
    /// Creates validated second-order parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotFinite`] if either value is `NaN` or
    /// infinite, [`ParameterError::NonPositiveFrequency`] if
    /// `natural_frequency <= 0`, or [`ParameterError::NegativeDamping`] if
    /// `damping_ratio < 0`.
    pub fn new(natural_frequency: f64, damping_ratio: f64) -> Result<Self, ParameterError> {
        ensure_finite("natural frequency", natural_frequency)?;
        ensure_finite("damping ratio", damping_ratio)?;
        if natural_frequency <= 0.0 {
            return Err(ParameterError::NonPositiveFrequency(natural_frequency));
        }
        if damping_ratio < 0.0 {
            return Err(ParameterError::NegativeDamping(damping_ratio));
        }
        Ok(Self {
            natural_frequency,
            damping_ratio,
        })
    }

    /// Returns the natural frequency ωₙ in rad/s.
    #[must_use]
    pub fn natural_frequency(self) -> f64 {
        self.natural_frequency
    }

    /// Returns the damping ratio ζ.
    #[must_use]
    pub fn damping_ratio(self) -> f64 {
        self.damping_ratio
    }

    /// Classifies the system into its damping [`Regime`].
    #[must_use]
    pub fn regime(self) -> Regime {
        let wn = self.natural_frequency;
        let zeta = self.damping_ratio;

        if zeta < 1.0 - CRITICAL_TOLERANCE {
            Regime::Underdamped {
                damped_frequency: wn * (1.0 - zeta * zeta).sqrt(),
                phase: zeta.acos(),
            }
        } else if zeta <= 1.0 + CRITICAL_TOLERANCE {
            Regime::CriticallyDamped
        } else {
            let spread = (zeta * zeta - 1.0).sqrt();
            let s1 = -wn * (zeta - spread);
            let s2 = -wn * (zeta + spread);
            let a = s2 / (s2 - s1);
            let b = -s1 / (s2 - s1);
            Regime::Overdamped { s1, s2, a, b }
        }
    }

    /// Evaluates the closed-form unit-step response over `grid`.
    ///
    /// Produces one output sample per grid entry, in grid order. An empty
    /// grid yields an empty signal. The evaluation is pure: it allocates
    /// only the output and touches no shared state, so concurrent calls on
    /// the same parameters are safe.
    #[must_use]
    pub fn step_response(self, grid: &TimeGrid) -> Signal {
        let wn = self.natural_frequency;
        let zeta = self.damping_ratio;

        let values = match self.regime() {
            Regime::Underdamped {
                damped_frequency,
                phase,
            } => {
                let scale = 1.0 / (1.0 - zeta * zeta).sqrt();
                grid.times()
                    .iter()
                    .map(|&t| {
                        1.0 - scale * (-zeta * wn * t).exp() * (damped_frequency * t + phase).sin()
                    })
                    .collect()
            }
            Regime::CriticallyDamped => grid
                .times()
                .iter()
                .map(|&t| 1.0 - (-wn * t).exp() * (1.0 + wn * t))
                .collect(),
            Regime::Overdamped { s1, s2, a, b } => grid
                .times()
                .iter()
                .map(|&t| 1.0 - (a * (s1 * t).exp() + b * (s2 * t).exp()))
                .collect(),
        };

        Signal::new(values)
    }

    /// Returns the theoretical 2% settling time `4 / (ζωₙ)`.
    ///
    /// Returns `None` for an undamped system (`ζ = 0`), which never
    /// settles.
    #[must_use]
    pub fn settling_time(self) -> Option<f64> {
        (self.damping_ratio > 0.0).then(|| 4.0 / (self.damping_ratio * self.natural_frequency))
    }

    /// Returns the theoretical percent overshoot
    /// `100·e^(−ζπ/√(1−ζ²))` for an underdamped system.
    ///
    /// Returns `None` for critically damped and overdamped systems, whose
    /// step responses do not overshoot.
    #[must_use]
    pub fn peak_overshoot(self) -> Option<f64> {
        match self.regime() {
            Regime::Underdamped { .. } => {
                let zeta = self.damping_ratio;
                let exponent = -zeta * std::f64::consts::PI / (1.0 - zeta * zeta).sqrt();
                Some(100.0 * exponent.exp())
            }
            _ => None,
        }
    }

    /// Returns the time of the first response peak `π / ω_d`, defined only
    /// for underdamped systems.
    #[must_use]
    pub fn peak_time(self) -> Option<f64> {
        match self.regime() {
            Regime::Underdamped {
                damped_frequency, ..
            } => Some(std::f64::consts::PI / damped_frequency),
            _ => None,
        }
    }

    /// Builds a time grid long enough to show the response visually
    /// settling: `t_final = max(6·t_s, 8/ωₙ, 10)` seconds, falling back to
    /// `max(8/ωₙ, 10)` for undamped systems.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `count` requests a grid the window
    /// cannot represent (this requires `count >= 2` in practice).
    pub fn settling_window(self, count: usize) -> Result<TimeGrid, GridError> {
        let floor = (8.0 / self.natural_frequency).max(10.0);
        let t_final = match self.settling_time() {
            Some(ts) => (6.0 * ts).max(floor),
            None => floor,
        };
        TimeGrid::linspace(0.0, t_final, count)
    }
}

/// Input for the [`SecondOrderStep`] component.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderStepInput {
    pub parameters: SecondOrderParameters,
    pub grid: TimeGrid,
}

/// Unit-step response evaluation as a composable [`Component`].
///
/// The parameters are validated at construction and the grid at its own
/// construction, so the call itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondOrderStep;

impl Component for SecondOrderStep {
    type Input = SecondOrderStepInput;
    type Output = Signal;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.parameters.step_response(&input.grid))
    }
}
