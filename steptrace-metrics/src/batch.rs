use serde::{Deserialize, Serialize};
use steptrace_core::GridError;
use steptrace_response::SecondOrderParameters;
use thiserror::Error;

use crate::{BandError, MetricsError, SettlingTime, ToleranceBand, settling_time};

/// One row of a batch evaluation: a labeled system with its theoretical
/// and measured settling times.
///
/// `theoretical_settling` is absent for undamped systems, which never
/// settle. `measured_settling` is absent only when the response never
/// entered the tolerance band within the evaluation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub label: String,
    pub natural_frequency: f64,
    pub damping_ratio: f64,
    pub theoretical_settling: Option<f64>,
    pub measured_settling: Option<SettlingTime>,
}

/// Errors that can occur during batch evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BatchError {
    #[error(transparent)]
    Band(#[from] BandError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Evaluates a batch of labeled second-order systems and collects one
/// [`ResponseRecord`] per system, in input order.
///
/// For each system, a settling window long enough to show the response
/// settling is sampled with `points` samples, the closed-form step
/// response is evaluated over it, and the settling time is measured
/// against a symmetric `tolerance` band around the unit final value (with
/// the first-crossing fallback).
///
/// The returned records replace any ad-hoc result accumulation on the
/// caller's side; nothing is stored between calls.
///
/// # Errors
///
/// Returns a [`BatchError`] if the tolerance band or the evaluation window
/// cannot be constructed.
///
/// # Examples
///
/// ```
/// use steptrace_metrics::evaluate_batch;
/// use steptrace_response::SecondOrderParameters;
///
/// let records = evaluate_batch(
///     [
///         ("G1(s)", SecondOrderParameters::new(5.0, 0.4).unwrap()),
///         ("G2(s)", SecondOrderParameters::new(6.0, 0.5).unwrap()),
///     ],
///     0.02,
///     20_001,
/// )
/// .unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].label, "G1(s)");
/// assert_eq!(records[0].theoretical_settling, Some(2.0));
/// ```
pub fn evaluate_batch<'a, I>(
    systems: I,
    tolerance: f64,
    points: usize,
) -> Result<Vec<ResponseRecord>, BatchError>
where
    I: IntoIterator<Item = (&'a str, SecondOrderParameters)>,
{
    let band = ToleranceBand::symmetric(1.0, tolerance)?;

    systems
        .into_iter()
        .map(|(label, parameters)| {
            let grid = parameters.settling_window(points)?;
            let signal = parameters.step_response(&grid);
            let measured = settling_time(&signal, &grid, &band)?;

            Ok(ResponseRecord {
                label: label.to_string(),
                natural_frequency: parameters.natural_frequency(),
                damping_ratio: parameters.damping_ratio(),
                theoretical_settling: parameters.settling_time(),
                measured_settling: measured,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(wn: f64, zeta: f64) -> SecondOrderParameters {
        SecondOrderParameters::new(wn, zeta).unwrap()
    }

    #[test]
    fn records_preserve_input_order() {
        let records = evaluate_batch(
            [
                ("G1(s)", system(5.0, 0.4)),
                ("G2(s)", system(6.0, 0.5)),
                ("G3(s)", system(7.0, 1.0)),
                ("G4(s)", system(10.0, 0.05)),
            ],
            0.02,
            20_001,
        )
        .unwrap();

        let labels: Vec<_> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["G1(s)", "G2(s)", "G3(s)", "G4(s)"]);
    }

    #[test]
    fn damped_systems_settle_persistently() {
        let records = evaluate_batch(
            [("a", system(5.0, 0.4)), ("b", system(7.0, 1.0))],
            0.02,
            20_001,
        )
        .unwrap();

        for record in &records {
            let measured = record.measured_settling.unwrap();
            assert!(measured.is_persistent());
            // The measured time tracks the 4/(ζωₙ) approximation loosely.
            let theoretical = record.theoretical_settling.unwrap();
            assert!(measured.time() > 0.0);
            assert!(measured.time() < 2.0 * theoretical);
        }
    }

    #[test]
    fn undamped_system_only_crosses() {
        let records = evaluate_batch([("u", system(2.0, 0.0))], 0.02, 10_001).unwrap();

        let record = &records[0];
        assert_eq!(record.theoretical_settling, None);
        // The oscillation sweeps through the band forever without staying.
        assert!(matches!(
            record.measured_settling,
            Some(SettlingTime::FirstCrossing(_))
        ));
    }

    #[test]
    fn invalid_tolerance_is_rejected() {
        assert!(matches!(
            evaluate_batch([("a", system(5.0, 0.4))], 0.0, 101),
            Err(BatchError::Band(_))
        ));
    }
}
