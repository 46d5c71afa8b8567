use uom::si::{
    capacitance::farad,
    electrical_resistance::ohm,
    f64::{Capacitance, ElectricalResistance, Inductance},
    inductance::henry,
};

use crate::{FirstOrderParameters, ParameterError, SecondOrderParameters};

/// A series RLC circuit driven by a voltage source, with the output taken
/// across the capacitor.
///
/// The voltage transfer function is the canonical second-order form with
/// `ωₙ = 1/√(LC)` and `ζ = (R/2)·√(C/L)`.
///
/// # Examples
///
/// ```
/// use steptrace_response::SeriesRlc;
///
/// // 50 Ω, 10 mH, 10 µF
/// let params = SeriesRlc::from_si(50.0, 10e-3, 10e-6)
///     .second_order()
///     .unwrap();
/// assert!((params.natural_frequency() - 3162.28).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRlc {
    pub resistance: ElectricalResistance,
    pub inductance: Inductance,
    pub capacitance: Capacitance,
}

impl SeriesRlc {
    /// Creates a circuit from raw SI values (Ω, H, F).
    #[must_use]
    pub fn from_si(resistance: f64, inductance: f64, capacitance: f64) -> Self {
        Self {
            resistance: ElectricalResistance::new::<ohm>(resistance),
            inductance: Inductance::new::<henry>(inductance),
            capacitance: Capacitance::new::<farad>(capacitance),
        }
    }

    /// Converts the element values into second-order system parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if the element values produce an
    /// invalid system (non-positive inductance or capacitance, negative
    /// resistance).
    pub fn second_order(&self) -> Result<SecondOrderParameters, ParameterError> {
        let r = self.resistance.get::<ohm>();
        let l = self.inductance.get::<henry>();
        let c = self.capacitance.get::<farad>();

        let natural_frequency = 1.0 / (l * c).sqrt();
        let damping_ratio = (r / 2.0) * (c / l).sqrt();
        SecondOrderParameters::new(natural_frequency, damping_ratio)
    }
}

/// A first-order RC low-pass filter with the output taken across the
/// capacitor: unit DC gain and time constant `τ = RC`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcFilter {
    pub resistance: ElectricalResistance,
    pub capacitance: Capacitance,
}

impl RcFilter {
    /// Creates a filter from raw SI values (Ω, F).
    #[must_use]
    pub fn from_si(resistance: f64, capacitance: f64) -> Self {
        Self {
            resistance: ElectricalResistance::new::<ohm>(resistance),
            capacitance: Capacitance::new::<farad>(capacitance),
        }
    }

    /// Converts the element values into first-order system parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] if `RC` is not a valid positive time
    /// constant.
    pub fn first_order(&self) -> Result<FirstOrderParameters, ParameterError> {
        let tau = self.resistance.get::<ohm>() * self.capacitance.get::<farad>();
        FirstOrderParameters::new(1.0, tau)
    }
}
