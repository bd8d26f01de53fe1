//! RK4 regression against the undamped harmonic oscillator.

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use loft_core::Status;
use loft_solvers::transient::rk4;

/// System `x'' = -omega^2 x` written as `[x, v]`.
fn oscillator() -> Vec<fn(f64, &[f64], &f64) -> f64> {
    vec![|_t, y, _omega| y[1], |_t, y, omega| -omega * omega * y[0]]
}

#[test]
fn full_period_returns_to_the_initial_state() {
    let omega = 1.0;
    let initial = [2.0, 1.0];

    let trajectory = rk4::solve_to_end(&oscillator(), &initial, 400, 0.0, TAU, &omega)
        .expect("should integrate");

    assert_eq!(trajectory.status, Status::Complete);
    let last = trajectory.last();
    assert_relative_eq!(last.y[0], initial[0], epsilon = 1e-5);
    assert_relative_eq!(last.y[1], initial[1], epsilon = 1e-5);
}

#[test]
fn quarter_period_swaps_position_and_velocity() {
    let omega = 1.0;

    let trajectory = rk4::solve_to_end(&oscillator(), &[1.0, 0.0], 100, 0.0, TAU / 4.0, &omega)
        .expect("should integrate");

    // cos -> 0, -sin -> -1 after a quarter period.
    let last = trajectory.last();
    assert_relative_eq!(last.y[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(last.y[1], -1.0, epsilon = 1e-6);
}
