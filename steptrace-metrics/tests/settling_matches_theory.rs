//! End-to-end checks: closed-form responses measured against the
//! theoretical settling-time and overshoot formulas.

use approx::assert_relative_eq;
use steptrace_metrics::{ToleranceBand, first_persistent_time, peak, percent_overshoot};
use steptrace_response::{SecondOrderParameters, damping_from_overshoot};

#[test]
fn measured_settling_tracks_the_theoretical_estimate() {
    // 4/(ζωₙ) approximates the 2% settling time of the decay envelope, so
    // the measured time lands in its neighborhood for underdamped and
    // critically damped systems alike.
    let band = ToleranceBand::symmetric(1.0, 0.02).unwrap();

    for (wn, zeta) in [(5.0, 0.4), (6.0, 0.5), (10.0, 0.05), (7.0, 1.0)] {
        let params = SecondOrderParameters::new(wn, zeta).unwrap();
        let grid = params.settling_window(20_001).unwrap();
        let signal = params.step_response(&grid);

        let measured = first_persistent_time(&signal, &grid, &band)
            .unwrap()
            .expect("damped responses settle within their window");
        let theoretical = params.settling_time().unwrap();

        assert!(
            measured > 0.25 * theoretical && measured < 2.0 * theoretical,
            "ωₙ={wn}, ζ={zeta}: measured {measured} vs theoretical {theoretical}"
        );
    }
}

#[test]
fn measured_overshoot_matches_the_underdamped_formula() {
    let params = SecondOrderParameters::new(5.0, 0.4).unwrap();
    let grid = params.settling_window(200_001).unwrap();
    let signal = params.step_response(&grid);

    let measured = percent_overshoot(&signal, 1.0).unwrap();
    let theoretical = params.peak_overshoot().unwrap();
    assert_relative_eq!(measured, theoretical, max_relative = 1e-4);

    // The measured peak sits at π/ω_d.
    let (peak_time, _) = peak(&signal, &grid).unwrap().unwrap();
    assert_relative_eq!(peak_time, params.peak_time().unwrap(), max_relative = 1e-3);

    // And the measured overshoot solves back to the damping ratio.
    assert_relative_eq!(
        damping_from_overshoot(measured).unwrap(),
        0.4,
        max_relative = 1e-4
    );
}

#[test]
fn finer_grids_refine_the_reported_settling_time() {
    // Reported times are grid samples, so refining the grid can only move
    // the report by less than one coarse sampling interval.
    let params = SecondOrderParameters::new(5.0, 0.4).unwrap();
    let band = ToleranceBand::symmetric(1.0, 0.02).unwrap();

    let coarse_grid = params.settling_window(1_001).unwrap();
    let fine_grid = params.settling_window(100_001).unwrap();
    let coarse_dt = coarse_grid.times()[1] - coarse_grid.times()[0];

    let coarse = first_persistent_time(&params.step_response(&coarse_grid), &coarse_grid, &band)
        .unwrap()
        .unwrap();
    let fine = first_persistent_time(&params.step_response(&fine_grid), &fine_grid, &band)
        .unwrap()
        .unwrap();

    assert!((coarse - fine).abs() <= coarse_dt);
}
